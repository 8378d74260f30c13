//! Flat-file record I/O with atomic writes
//!
//! Every entity file is a header-less CSV: one record per line. Reads are
//! forgiving (bad lines are skipped), writes go through a temp file and a
//! rename so a crash never leaves a half-written file behind.

use std::fs::{self, File};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::TrackerError;

/// Date format used in data files
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Read every record from `path`, converting each with `parse`
///
/// A missing file yields an empty list. Lines that fail to parse are logged
/// and skipped; only failing to open or read the file is an error.
pub fn read_records<T, P, F>(path: P, mut parse: F) -> Result<Vec<T>, TrackerError>
where
    P: AsRef<Path>,
    F: FnMut(&StringRecord) -> Result<T, String>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut items = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let line = index + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                return Err(TrackerError::Csv(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
            Err(e) => {
                log::warn!("{}:{}: skipping unreadable line: {}", path.display(), line, e);
                continue;
            }
        };

        match parse(&record) {
            Ok(item) => items.push(item),
            Err(reason) => {
                log::warn!("{}:{}: skipping line: {}", path.display(), line, reason);
            }
        }
    }

    Ok(items)
}

/// Write records to `path` atomically (write to temp, then rename)
pub fn write_records_atomic<P, I>(path: P, records: I) -> Result<(), TrackerError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Vec<String>>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must sit next to the target for the rename to be atomic
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        TrackerError::Storage(format!("Failed to create {}: {}", temp_path.display(), e))
    })?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    for record in records {
        writer.write_record(&record).map_err(|e| {
            TrackerError::Csv(format!("Failed to write {}: {}", temp_path.display(), e))
        })?;
    }

    let file = writer.into_inner().map_err(|e| {
        TrackerError::Io(format!("Failed to flush {}: {}", temp_path.display(), e.error()))
    })?;

    file.sync_all().map_err(|e| {
        TrackerError::Io(format!("Failed to sync {}: {}", temp_path.display(), e))
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Fetch field `index` of a record, trimmed
pub fn field<'r>(record: &'r StringRecord, index: usize) -> Result<&'r str, String> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| format!("missing field {}", index + 1))
}
