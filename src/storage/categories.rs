//! Category store
//!
//! Persists categories and limits to `categories.csv` with the header
//! `Category,Limit`, one row per category in registry order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::BudgetError;
use crate::models::{Category, Money};

use super::csv_io::{read_csv_records, write_csv_atomic};

/// Header of the category store
pub const CATEGORY_HEADER: &[&str] = &["Category", "Limit"];

/// File-backed store for the category registry
#[derive(Debug, Clone)]
pub struct CategoryStore {
    path: PathBuf,
}

impl CategoryStore {
    /// Create a new category store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load categories from disk
    ///
    /// `Ok(None)` means the file is absent or empty. An empty `Limit` cell
    /// reads as zero.
    pub fn load(&self) -> Result<Option<Vec<Category>>, BudgetError> {
        let Some(records) = read_csv_records(&self.path, CATEGORY_HEADER)? else {
            return Ok(None);
        };

        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            let name = record[0].to_string();

            let limit = match record[1].trim() {
                "" => Money::zero(),
                raw => Money::parse(raw).map_err(|e| {
                    BudgetError::corrupt(&self.path, format!("row {}: {}", row, e))
                })?,
            };

            let category = Category::with_limit(name, limit);
            category
                .validate()
                .map_err(|e| BudgetError::corrupt(&self.path, format!("row {}: {}", row, e)))?;

            if !seen.insert(category.name.clone()) {
                return Err(BudgetError::corrupt(
                    &self.path,
                    format!("row {}: duplicate category {:?}", row, category.name),
                ));
            }

            categories.push(category);
        }

        debug!(path = %self.path.display(), count = categories.len(), "loaded categories");
        Ok(Some(categories))
    }

    /// Save categories to disk, replacing the whole file
    pub fn save(&self, categories: &[Category]) -> Result<(), BudgetError> {
        let rows = categories
            .iter()
            .map(|c| [c.name.clone(), c.limit.to_string()]);

        write_csv_atomic(&self.path, CATEGORY_HEADER, rows)?;
        debug!(path = %self.path.display(), count = categories.len(), "saved categories");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, CategoryStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.csv");
        let store = CategoryStore::new(path);
        (temp_dir, store)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, store) = create_test_store();

        let categories = vec![
            Category::with_limit("Food", Money::from_units(500)),
            Category::with_limit("Books", Money::from_cents(1999)),
            Category::new("Gifts"),
        ];
        store.save(&categories).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "Category,Limit\nFood,500.00\nBooks,19.99\nGifts,0.00\n"
        );

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, categories);
    }

    #[test]
    fn test_reads_float_style_limits() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "Category,Limit\nFood,500.0\nOther,\n").unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded[0].limit, Money::from_units(500));
        assert!(loaded[1].limit.is_zero());
    }

    #[test]
    fn test_bad_limit_is_corruption() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "Category,Limit\nFood,lots\n").unwrap();

        assert!(store.load().unwrap_err().is_corruption());
    }

    #[test]
    fn test_negative_limit_is_corruption() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "Category,Limit\nFood,-5\n").unwrap();

        assert!(store.load().unwrap_err().is_corruption());
    }

    #[test]
    fn test_duplicate_name_is_corruption() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "Category,Limit\nFood,1\nFood,2\n").unwrap();

        assert!(store.load().unwrap_err().is_corruption());
    }
}
