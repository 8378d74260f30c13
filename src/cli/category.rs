//! Category management menu

use std::io::{BufRead, Write};

use crate::cli::prompt::Prompter;
use crate::display::category::format_category_list;
use crate::error::TrackerResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Run the category submenu; categories are saved on the way out
pub fn run_category_menu<R: BufRead, W: Write>(
    storage: &mut Storage,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    loop {
        prompter.say("")?;
        prompter.heading("Category Management")?;
        prompter.say("1. Add Category")?;
        prompter.say("2. Edit Category")?;
        prompter.say("3. Delete Category")?;
        prompter.say("4. View Categories")?;
        prompter.say("5. Back")?;

        match prompter.read_menu_choice("Enter your choice: ", 5)? {
            1 => add_category(storage, prompter)?,
            2 => edit_category(storage, prompter)?,
            3 => delete_category(storage, prompter)?,
            4 => prompter.say(&format_category_list(storage.categories.get_all()))?,
            _ => {
                save_categories(storage, prompter)?;
                return Ok(());
            }
        }
    }
}

fn add_category<R: BufRead, W: Write>(
    storage: &mut Storage,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    let name = prompter.read_description("Enter category name: ", None)?;

    match CategoryService::new(storage).create(&name) {
        Ok(category) => prompter.success(&format!(
            "Category '{}' added with ID {}.",
            category.name, category.id
        )),
        Err(e) => prompter.error(&e.to_string()),
    }
}

fn edit_category<R: BufRead, W: Write>(
    storage: &mut Storage,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    if storage.categories.is_empty() {
        return prompter.warn("No categories found.");
    }

    prompter.say(&format_category_list(storage.categories.get_all()))?;
    let id = prompter.read_category_id("Enter category ID to edit: ", None, &storage.categories)?;
    let current = storage
        .categories
        .get(id)
        .map(|c| c.name.clone())
        .unwrap_or_default();

    let name = prompter.read_description(
        &format!("Enter new name (blank keeps '{}'): ", current),
        Some(current.as_str()),
    )?;

    match CategoryService::new(storage).rename(id, &name) {
        Ok(category) => prompter.success(&format!("Category {} renamed to '{}'.", id, category.name)),
        Err(e) => prompter.error(&e.to_string()),
    }
}

fn delete_category<R: BufRead, W: Write>(
    storage: &mut Storage,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    if storage.categories.is_empty() {
        return prompter.warn("No categories found.");
    }

    prompter.say(&format_category_list(storage.categories.get_all()))?;
    let id = prompter.read_category_id("Enter category ID to delete: ", None, &storage.categories)?;

    match CategoryService::new(storage).delete(id) {
        Ok(category) => prompter.success(&format!("Category '{}' deleted.", category.name)),
        Err(e) => prompter.error(&e.to_string()),
    }
}

fn save_categories<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    if let Err(e) = storage.categories.save() {
        log::error!("Failed to save categories: {}", e);
        prompter.error(&format!("Failed to save categories: {}", e))?;
    }
    Ok(())
}
