//! Category registry
//!
//! The single source of truth for valid categories and their limits. Every
//! successful mutation rewrites the category store before returning.

use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{validate_name, Category, DefaultCategory, Money};
use crate::storage::{quarantine, CategoryStore, LoadOutcome};

/// Registry of categories and limits, kept in insertion order
#[derive(Debug)]
pub struct CategoryRegistry {
    store: CategoryStore,
    categories: Vec<Category>,
    load_outcome: LoadOutcome,
}

impl CategoryRegistry {
    /// Open the registry from its store
    ///
    /// An absent or empty store is seeded with the default categories. A
    /// corrupt store is copied aside and replaced by the same defaults; the
    /// event is reported through [`CategoryRegistry::load_outcome`].
    pub fn open(store: CategoryStore) -> BudgetResult<Self> {
        let (categories, load_outcome) = match store.load() {
            Ok(Some(categories)) if !categories.is_empty() => (categories, LoadOutcome::Loaded),
            Ok(_) => {
                info!(path = %store.path().display(), "seeding default categories");
                (DefaultCategory::seed(), LoadOutcome::Created)
            }
            Err(BudgetError::StorageCorruption { path, reason }) => {
                let quarantined = quarantine(&path)?;
                warn!(
                    path = %path.display(),
                    %reason,
                    "category store is corrupt; restoring default categories"
                );
                (
                    DefaultCategory::seed(),
                    LoadOutcome::Recovered {
                        reason,
                        quarantined,
                    },
                )
            }
            Err(e) => return Err(e),
        };

        if load_outcome != LoadOutcome::Loaded {
            store.save(&categories)?;
        }

        Ok(Self {
            store,
            categories,
            load_outcome,
        })
    }

    /// How the store came up when the registry was opened
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Add a new category; `None` for the limit means zero (unmonitored)
    pub fn add_category(&mut self, name: &str, limit: Option<Money>) -> BudgetResult<&Category> {
        let name = name.trim();
        validate_name(name).map_err(|e| BudgetError::MalformedInput(e.to_string()))?;

        if self.contains(name) {
            return Err(BudgetError::DuplicateCategory(name.to_string()));
        }

        let category = Category::with_limit(name, limit.unwrap_or_default());
        category
            .validate()
            .map_err(|e| BudgetError::MalformedInput(e.to_string()))?;

        let mut updated = self.categories.clone();
        updated.push(category);
        self.commit(updated)?;

        info!(category = name, "added category");
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Remove a category
    ///
    /// Transactions already recorded against it are left untouched.
    pub fn remove_category(&mut self, name: &str) -> BudgetResult<Category> {
        let name = name.trim();
        let index = self
            .position(name)
            .ok_or_else(|| BudgetError::UnknownCategory(name.to_string()))?;

        let mut updated = self.categories.clone();
        let removed = updated.remove(index);
        self.commit(updated)?;

        info!(category = name, "removed category");
        Ok(removed)
    }

    /// Change the limit of an existing category
    pub fn set_limit(&mut self, name: &str, amount: Money) -> BudgetResult<()> {
        let name = name.trim();
        if amount.is_negative() {
            return Err(BudgetError::MalformedInput(format!(
                "limit cannot be negative: {}",
                amount
            )));
        }

        let index = self
            .position(name)
            .ok_or_else(|| BudgetError::UnknownCategory(name.to_string()))?;

        let mut updated = self.categories.clone();
        updated[index].limit = amount;
        self.commit(updated)?;

        info!(category = name, limit = %amount, "set category limit");
        Ok(())
    }

    /// Get the limit for a category, `None` if the category is unknown
    pub fn get_limit(&self, name: &str) -> Option<Money> {
        self.get(name).map(|c| c.limit)
    }

    /// Whether spending `current_spend` exceeds the category limit
    ///
    /// Unknown categories always count as over the limit.
    pub fn is_limit_reached(&self, name: &str, current_spend: Money) -> bool {
        match self.get_limit(name) {
            Some(limit) => current_spend > limit,
            None => true,
        }
    }

    /// Category names in insertion order
    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// All categories with their limits, in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a category by exact name
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Check whether a category is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Count categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the registry has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    /// Persist `updated`, and only then make it the in-memory state
    fn commit(&mut self, updated: Vec<Category>) -> BudgetResult<()> {
        self.store.save(&updated)?;
        self.categories = updated;
        Ok(())
    }
}
