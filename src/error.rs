use thiserror::Error;

/// Errors raised while building a [`RecipeStore`](crate::recipe::RecipeStore)
/// from a [`TableDefinition`](crate::recipe::TableDefinition).
///
/// Construction is total-or-nothing: the first malformed entry aborts the
/// whole build and no partial store is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecipeError {
    #[error("Recipe '{id}' is missing the required field '{field}'")]
    MissingField { id: String, field: &'static str },

    #[error("Recipe '{id}' has a non-positive batch size: {value}")]
    NonPositiveBatchSize { id: String, value: i64 },

    #[error("Recipe '{id}' declares component '{component_id}' with a non-positive quantity: {value}")]
    NonPositiveComponentQuantity {
        id: String,
        component_id: String,
        value: i64,
    },

    #[error("Recipe id '{id}' appears more than once in the input table")]
    DuplicateId { id: String },
}

/// An item id was referenced but has no entry in the recipe store.
///
/// Raised by store lookups, requirement resolution (for any nested
/// component), and production ordering. Never swallowed: a single missing
/// dependency invalidates the whole operation, and no fallback quantity is
/// ever substituted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Item '{item_id}' is not present in the recipe store")]
pub struct UnknownItemError {
    pub item_id: String,
}

impl UnknownItemError {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
        }
    }
}

/// An unrecognized ledger-merge operation token was requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported ledger operation: '{operation}'")]
pub struct UnsupportedOperationError {
    pub operation: String,
}

/// The recipe graph contains a cycle, so no full production order exists.
///
/// `unordered` holds every id that could not be scheduled, in store order;
/// these are the members of at least one cycle plus anything downstream of
/// one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Recipe graph contains a cycle; {} item(s) could not be ordered: {unordered:?}", .unordered.len())]
pub struct CyclicDependencyError {
    pub unordered: Vec<String>,
}

/// Errors raised by [`production_order`](crate::schedule::production_order).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(transparent)]
    UnknownItem(#[from] UnknownItemError),

    #[error(transparent)]
    Cycle(#[from] CyclicDependencyError),
}

/// Errors that can occur when converting a custom input format into a
/// [`TableDefinition`](crate::recipe::TableDefinition).
#[derive(Error, Debug, Clone)]
pub enum TableConversionError {
    #[error("Invalid custom table data: {0}")]
    ValidationError(String),
}

/// Errors raised while loading a raw recipe table from disk.
#[derive(Error, Debug, Clone)]
pub enum TableLoadError {
    #[error("Could not read recipe table '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse recipe table JSON: {0}")]
    JsonParseError(String),
}

/// Errors raised while persisting or restoring a built store artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Could not access artifact file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Artifact serialization failed: {0}")]
    Encode(String),

    #[error("Artifact deserialization failed: {0}")]
    Decode(String),
}
