//! # Kumitate - BOM Expansion and Production Scheduling Engine
//!
//! **Kumitate** resolves the full raw-material cost of producing a quantity
//! of a manufactured item, given a static bill-of-materials table in which
//! each item's recipe recursively references other items as components. It
//! also derives a production schedule: a topological ordering of the recipe
//! graph with components before dependents.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a "recipe table." The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your recipe table format (JSON, CSV, a game
//!     data dump, ...) into your own Rust structs. The bundled [`data::RawTable`]
//!     covers the common JSON layout out of the box.
//! 2.  **Convert to Kumitate's Model**: Implement the [`recipe::IntoTable`]
//!     trait for your structs to provide a translation layer into a
//!     [`recipe::TableDefinition`].
//! 3.  **Build the Store**: [`recipe::RecipeStore::from_table`] validates
//!     every entry once, up front, and produces an immutable store. All
//!     shape errors surface here, not in the middle of a query.
//! 4.  **Query**: Run [`resolver::Resolver::resolve`] for raw-material
//!     totals and [`schedule::production_order`] for a build order, as often
//!     as needed. Both are pure reads over the shared store.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumitate::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A four-item table: a ship hull is bought raw, engines are built
//!     // in batches of 2 from metal, and a ship needs two hulls and one
//!     // engine.
//!     let table = TableDefinition {
//!         entries: vec![
//!             RecipeEntry::new("ship", "Shuttle", 1)
//!                 .with_component("hull", 2)
//!                 .with_component("engine", 1),
//!             RecipeEntry::new("hull", "Hull Plate", 1),
//!             RecipeEntry::new("engine", "Ion Engine", 2)
//!                 .with_component("metal", 3),
//!             RecipeEntry::new("metal", "Metal", 1),
//!         ],
//!     };
//!
//!     let store = RecipeStore::from_table(table)?;
//!
//!     // Raw totals for one ship: the engine batch of 2 still costs a full
//!     // 3 metal, and intermediates (the engine itself) never appear.
//!     let resolver = Resolver::new(&store);
//!     let totals = resolver.resolve("ship", 1)?;
//!     assert_eq!(totals.get("hull"), 2);
//!     assert_eq!(totals.get("metal"), 3);
//!     assert_eq!(totals.get("engine"), 0);
//!
//!     // A build order with components before dependents.
//!     let order = production_order(&store)?;
//!     assert_eq!(order, vec!["hull", "metal", "engine", "ship"]);
//!
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod ledger;
pub mod prelude;
pub mod recipe;
pub mod resolver;
pub mod schedule;
