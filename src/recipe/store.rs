use super::definition::{RecipeEntry, TableDefinition};
use crate::error::{MalformedRecipeError, UnknownItemError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single item's validated recipe.
///
/// Immutable after store construction. `batch_size` is the quantity of this
/// item produced per production cycle; `components` maps component item ids
/// to the quantity consumed per one batch. An empty component map marks a
/// leaf (raw/purchasable) item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub batch_size: u64,
    pub components: IndexMap<String, u64>,
}

impl Recipe {
    /// True if this recipe has no components, i.e. the item is a raw
    /// material that only ever appears as a resolver output.
    pub fn is_leaf(&self) -> bool {
        self.components.is_empty()
    }
}

/// The immutable mapping from item id to validated [`Recipe`].
///
/// Built once from a [`TableDefinition`] and read-only thereafter, so it can
/// be shared freely across concurrent resolution queries. Iteration order is
/// the insertion order of the input table; the production orderer relies on
/// this to produce deterministic schedules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStore {
    recipes: IndexMap<String, Recipe>,
}

impl RecipeStore {
    /// Validates every entry of `table` and builds the store.
    ///
    /// Construction is total-or-nothing: the first malformed entry aborts
    /// the build with a [`MalformedRecipeError`] naming the offending id and
    /// field. Component ids are *not* required to exist in the table here;
    /// a dangling reference surfaces later, as an [`UnknownItemError`] from
    /// whichever query first touches it.
    pub fn from_table(table: TableDefinition) -> Result<Self, MalformedRecipeError> {
        let mut recipes = IndexMap::with_capacity(table.entries.len());
        for entry in table.entries {
            let recipe = Self::validate_entry(entry)?;
            if recipes.contains_key(&recipe.id) {
                return Err(MalformedRecipeError::DuplicateId { id: recipe.id });
            }
            recipes.insert(recipe.id.clone(), recipe);
        }
        Ok(Self { recipes })
    }

    fn validate_entry(entry: RecipeEntry) -> Result<Recipe, MalformedRecipeError> {
        let RecipeEntry {
            id,
            name,
            batch_size,
            components,
        } = entry;

        let name = name.ok_or_else(|| MalformedRecipeError::MissingField {
            id: id.clone(),
            field: "typeName",
        })?;

        let batch_size = batch_size.ok_or_else(|| MalformedRecipeError::MissingField {
            id: id.clone(),
            field: "batch_size",
        })?;
        if batch_size <= 0 {
            return Err(MalformedRecipeError::NonPositiveBatchSize {
                id,
                value: batch_size,
            });
        }

        let mut validated = IndexMap::with_capacity(components.len());
        for (component_id, quantity) in components {
            if quantity <= 0 {
                return Err(MalformedRecipeError::NonPositiveComponentQuantity {
                    id,
                    component_id,
                    value: quantity,
                });
            }
            validated.insert(component_id, quantity as u64);
        }

        Ok(Recipe {
            id,
            name,
            batch_size: batch_size as u64,
            components: validated,
        })
    }

    /// Looks up a recipe by item id.
    ///
    /// Absence from the store is always an error: true raw materials are
    /// represented as zero-component recipes, never by missing entries.
    pub fn get(&self, item_id: &str) -> Result<&Recipe, UnknownItemError> {
        self.recipes
            .get(item_id)
            .ok_or_else(|| UnknownItemError::new(item_id))
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.recipes.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Iterates item ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    /// Iterates recipes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }
}
