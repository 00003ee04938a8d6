//! Common test utilities for building recipe tables and stores.
use kumitate::prelude::*;

/// Builds the four-item shipyard store:
///
/// - `ship` (batch 1) = 2 `hull` + 1 `engine`
/// - `hull` (batch 1), leaf
/// - `engine` (batch 2) = 3 `metal`
/// - `metal` (batch 1), leaf
#[allow(dead_code)]
pub fn shipyard_store() -> RecipeStore {
    let table = TableDefinition {
        entries: vec![
            RecipeEntry::new("ship", "Shuttle", 1)
                .with_component("hull", 2)
                .with_component("engine", 1),
            RecipeEntry::new("hull", "Hull Plate", 1),
            RecipeEntry::new("engine", "Ion Engine", 2).with_component("metal", 3),
            RecipeEntry::new("metal", "Metal", 1),
        ],
    };
    RecipeStore::from_table(table).expect("shipyard table is well-formed")
}

/// Builds a diamond-shaped store where two intermediates share a leaf:
///
/// - `gadget` (batch 1) = 1 `frame` + 1 `wiring`
/// - `frame` (batch 1) = 2 `copper`
/// - `wiring` (batch 1) = 3 `copper`
/// - `copper` (batch 1), leaf
#[allow(dead_code)]
pub fn diamond_store() -> RecipeStore {
    let table = TableDefinition {
        entries: vec![
            RecipeEntry::new("gadget", "Gadget", 1)
                .with_component("frame", 1)
                .with_component("wiring", 1),
            RecipeEntry::new("frame", "Frame", 1).with_component("copper", 2),
            RecipeEntry::new("wiring", "Wiring", 1).with_component("copper", 3),
            RecipeEntry::new("copper", "Copper", 1),
        ],
    };
    RecipeStore::from_table(table).expect("diamond table is well-formed")
}

/// Builds a store whose `widget` recipe produces batches of 3 from a single
/// leaf, for exercising the rounding boundary.
#[allow(dead_code)]
pub fn batched_store() -> RecipeStore {
    let table = TableDefinition {
        entries: vec![
            RecipeEntry::new("widget", "Widget", 3).with_component("ore", 5),
            RecipeEntry::new("ore", "Ore", 1),
        ],
    };
    RecipeStore::from_table(table).expect("batched table is well-formed")
}

/// Builds a two-item store with a direct cycle: `a` needs `b`, `b` needs `a`.
#[allow(dead_code)]
pub fn cyclic_store() -> RecipeStore {
    let table = TableDefinition {
        entries: vec![
            RecipeEntry::new("a", "Alpha", 1).with_component("b", 1),
            RecipeEntry::new("b", "Beta", 1).with_component("a", 1),
        ],
    };
    RecipeStore::from_table(table).expect("cyclic table is well-formed")
}

/// Builds a ledger from id/quantity pairs.
#[allow(dead_code)]
pub fn ledger_of(entries: &[(&str, u64)]) -> Ledger {
    entries
        .iter()
        .map(|(id, qty)| (id.to_string(), *qty))
        .collect()
}

/// The shipyard table in the raw JSON format, with opaque extra metadata.
#[allow(dead_code)]
pub const SHIPYARD_JSON: &str = r#"{
    "ship": {
        "typeName": "Shuttle",
        "unit_size": 1,
        "marketGroupID": 1912,
        "components": {"hull": 2, "engine": 1}
    },
    "hull": {
        "typeName": "Hull Plate",
        "unit_size": 1,
        "level": 0
    },
    "engine": {
        "typeName": "Ion Engine",
        "batch_size": 2,
        "components": {"metal": 3}
    },
    "metal": {
        "typeName": "Metal",
        "unit_size": 1,
        "iconID": "1361"
    }
}"#;
