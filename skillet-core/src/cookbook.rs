//! Cookbook store: the user's saved recipes as a JSON document on disk.
//!
//! The recipe name is the primary key; saving under an existing name replaces
//! the entry. There is no ordering invariant across entries, so a sorted map
//! keeps listings stable.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::types::{CookbookRecipe, RecipeDetails};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read or write store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// On-disk cookbook, keyed by recipe name.
///
/// The whole document is held in memory and rewritten on every mutation; the
/// mutex serializes access within this process.
#[derive(Debug)]
pub struct CookbookStore {
    path: PathBuf,
    recipes: Mutex<BTreeMap<String, RecipeDetails>>,
}

impl CookbookStore {
    /// Open the store at the given path, loading any existing document.
    /// A missing file is an empty cookbook.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let recipes = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let entries: Vec<CookbookRecipe> = serde_json::from_str(&content)?;
            entries.into_iter().map(|r| (r.name, r.details)).collect()
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            recipes: Mutex::new(recipes),
        })
    }

    /// All saved recipes, in name order.
    pub fn list(&self) -> Vec<CookbookRecipe> {
        let recipes = self.recipes.lock().unwrap();
        recipes
            .iter()
            .map(|(name, details)| CookbookRecipe {
                name: name.clone(),
                details: details.clone(),
            })
            .collect()
    }

    /// Look up a saved recipe by name.
    pub fn get(&self, name: &str) -> Option<RecipeDetails> {
        self.recipes.lock().unwrap().get(name).cloned()
    }

    /// Save a recipe, replacing any existing entry with the same name.
    pub fn save(&self, recipe: CookbookRecipe) -> Result<(), StoreError> {
        let mut recipes = self.recipes.lock().unwrap();
        recipes.insert(recipe.name, recipe.details);
        self.persist(&recipes)
    }

    /// Remove a recipe by name. Returns whether an entry was removed.
    pub fn remove(&self, name: &str) -> Result<bool, StoreError> {
        let mut recipes = self.recipes.lock().unwrap();
        let removed = recipes.remove(name).is_some();
        if removed {
            self.persist(&recipes)?;
        }
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.recipes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.lock().unwrap().is_empty()
    }

    fn persist(&self, recipes: &BTreeMap<String, RecipeDetails>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries: Vec<CookbookRecipe> = recipes
            .iter()
            .map(|(name, details)| CookbookRecipe {
                name: name.clone(),
                details: details.clone(),
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
