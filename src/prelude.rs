//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! kumitate crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumitate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load and validate a recipe table
//! let raw: RawTable = std::fs::read_to_string("path/to/materials.json")?.parse()?;
//! let store = RecipeStore::from_table(raw.into_table()?)?;
//!
//! // Resolve raw-material totals and a production order
//! let resolver = Resolver::new(&store);
//! let totals = resolver.resolve("advanced-circuit", 40)?;
//! let order = production_order(&store)?;
//!
//! println!("Totals: {}", totals);
//! println!("Build order: {:?}", order);
//! # Ok(())
//! # }
//! ```

// Store construction and queries
pub use crate::recipe::{IntoTable, Recipe, RecipeEntry, RecipeStore, TableDefinition};
pub use crate::resolver::{BatchRounding, Resolver};
pub use crate::schedule::production_order;

// Quantity ledger
pub use crate::ledger::{Ledger, MergeOp};

// Boundary collaborators
pub use crate::data::{NameIndex, RawRecipeRecord, RawTable};

// Error types
pub use crate::error::{
    CyclicDependencyError, MalformedRecipeError, ScheduleError, UnknownItemError,
    UnsupportedOperationError,
};

// Map type used for demand sets and table records
pub use indexmap::IndexMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
