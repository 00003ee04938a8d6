/// The complete, canonical definition of a recipe table, ready for store
/// construction. This is the target structure for any custom data model
/// conversion.
#[derive(Debug, Clone, Default)]
pub struct TableDefinition {
    pub entries: Vec<RecipeEntry>,
}

/// Defines a single item's recipe as loaded from an external source.
///
/// Fields that the raw format may omit are `Option`s here; their absence is
/// diagnosed during store construction, not during conversion. An entry with
/// no components describes a leaf (raw/purchasable) item.
#[derive(Debug, Clone)]
pub struct RecipeEntry {
    pub id: String,
    pub name: Option<String>,
    pub batch_size: Option<i64>,
    pub components: Vec<(String, i64)>,
}

impl RecipeEntry {
    /// Creates a fully-specified entry with no components (a leaf).
    pub fn new(id: impl Into<String>, name: impl Into<String>, batch_size: i64) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            batch_size: Some(batch_size),
            components: Vec::new(),
        }
    }

    /// Appends a component requirement (per one batch of this recipe).
    pub fn with_component(mut self, component_id: impl Into<String>, quantity: i64) -> Self {
        self.components.push((component_id.into(), quantity));
        self
    }
}
