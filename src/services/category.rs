//! Category service
//!
//! Business rules for categories: non-empty names, `max + 1` ids, and no
//! deleting a category that an expense or income still references.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryId};
use crate::storage::{CategoryRepository, Storage};

/// Name returned for ids that resolve to no category
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Read-only category lookups used by prompts and graphs
pub trait CategoryDirectory {
    /// Check if a category with this id exists
    fn is_valid(&self, id: CategoryId) -> bool;

    /// Name of the category, or "Unknown" if there is none
    fn name_of(&self, id: CategoryId) -> String;
}

impl CategoryDirectory for CategoryRepository {
    fn is_valid(&self, id: CategoryId) -> bool {
        self.get(id).is_some()
    }

    fn name_of(&self, id: CategoryId) -> String {
        self.get(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
    }
}

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(&mut self, name: &str) -> TrackerResult<Category> {
        let id = self.storage.categories.next_id();
        if !id.is_assignable() {
            return Err(TrackerError::Validation("No category ids left".into()));
        }
        let category = Category::new(id, name.trim());
        category
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone());
        log::debug!("Created category {} ({})", category.id, category.name);
        Ok(category)
    }

    /// Rename an existing category
    pub fn rename(&mut self, id: CategoryId, name: &str) -> TrackerResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::category_not_found(id))?;

        category.rename(name.trim());
        category
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone());
        Ok(category)
    }

    /// Delete a category that no transaction references
    pub fn delete(&mut self, id: CategoryId) -> TrackerResult<Category> {
        let category = self
            .storage
            .categories
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::category_not_found(id))?;

        if self.is_in_use(id) {
            return Err(TrackerError::InUse {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        self.storage.categories.delete(id);
        log::debug!("Deleted category {} ({})", category.id, category.name);
        Ok(category)
    }

    /// List categories in insertion order
    pub fn list(&self) -> &[Category] {
        self.storage.categories.get_all()
    }

    /// Check whether any expense or income references the category
    pub fn is_in_use(&self, id: CategoryId) -> bool {
        self.storage.expenses.references_category(id)
            || self.storage.incomes.references_category(id)
    }
}
