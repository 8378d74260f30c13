//! Category repository for flat-file storage
//!
//! Manages loading and saving categories to categories.txt (`id,name`).

use std::path::PathBuf;

use csv::StringRecord;

use crate::error::TrackerError;
use crate::models::{Category, CategoryId};

use super::file_io::{field, read_records, write_records_atomic};

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: Vec<Category>,
}

impl CategoryRepository {
    /// Create a new, empty category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: Vec::new(),
        }
    }

    /// Load categories from disk, replacing what is in memory
    pub fn load(&mut self) -> Result<usize, TrackerError> {
        let loaded = read_records(&self.path, parse_category)?;

        self.categories.clear();
        for category in loaded {
            if self.get(category.id).is_some() {
                log::warn!(
                    "{}: skipping duplicate category id {}",
                    self.path.display(),
                    category.id
                );
                continue;
            }
            self.categories.push(category);
        }

        log::info!(
            "Loaded {} categories from {}",
            self.categories.len(),
            self.path.display()
        );
        Ok(self.categories.len())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        write_records_atomic(
            &self.path,
            self.categories
                .iter()
                .map(|c| vec![c.id.to_string(), c.name.clone()]),
        )?;
        log::info!(
            "Saved {} categories to {}",
            self.categories.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Get all categories in insertion order
    pub fn get_all(&self) -> &[Category] {
        &self.categories
    }

    /// Id the next created category will receive
    pub fn next_id(&self) -> CategoryId {
        CategoryId::next_after(self.categories.iter().map(|c| c.id))
    }

    /// Insert or update a category
    pub fn upsert(&mut self, category: Category) {
        match self.categories.iter().position(|c| c.id == category.id) {
            Some(index) => self.categories[index] = category,
            None => self.categories.push(category),
        }
    }

    /// Delete a category, returning it if it existed
    pub fn delete(&mut self, id: CategoryId) -> Option<Category> {
        let index = self.categories.iter().position(|c| c.id == id)?;
        Some(self.categories.remove(index))
    }

    pub fn count(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn parse_category(record: &StringRecord) -> Result<Category, String> {
    if record.len() != 2 {
        return Err(format!("expected 2 fields, got {}", record.len()));
    }

    let id: CategoryId = field(record, 0)?
        .parse()
        .map_err(|e| format!("invalid category id: {}", e))?;
    if !id.is_assignable() {
        return Err(format!("category id out of range: {}", id));
    }
    let name = field(record, 1)?;

    Ok(Category::new(id, name))
}
