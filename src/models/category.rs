//! Category model
//!
//! Categories are user-defined groupings that every expense and income
//! references by id.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A named grouping for transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Rename the category
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let length = self.name.chars().count();
        if length > 50 {
            return Err(CategoryValidationError::NameTooLong(length));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new(CategoryId::new(1), "Groceries");
        assert_eq!(category.id.value(), 1);
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.to_string(), "Groceries");
    }

    #[test]
    fn test_category_validation() {
        let mut category = Category::new(CategoryId::new(1), "Valid");
        assert!(category.validate().is_ok());

        category.rename("   ");
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::EmptyName)
        );

        category.rename("a".repeat(51));
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }

    #[test]
    fn test_name_length_counts_characters() {
        let accented = Category::new(CategoryId::new(1), "é".repeat(50));
        assert_eq!(accented.name.len(), 100);
        assert!(accented.validate().is_ok());

        let too_long = Category::new(CategoryId::new(1), "日".repeat(51));
        assert_eq!(
            too_long.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        );
    }
}
