use super::definition::TableDefinition;
use crate::error::TableConversionError;

/// A trait for custom data models that can be converted into a kumitate
/// [`TableDefinition`].
///
/// This is the primary extension point for making kumitate format-agnostic.
/// By implementing this trait on your own configuration structs, you provide
/// a translation layer that allows the store builder to consume your custom
/// recipe table format. The conversion should be purely structural; leave
/// all field validation to [`RecipeStore::from_table`](super::RecipeStore::from_table),
/// which reports malformed entries with the offending id and field.
///
/// # Example
///
/// ```rust,no_run
/// use kumitate::prelude::*;
/// use kumitate::error::TableConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyRow { id: String, label: String, lot: i64, needs: Vec<(String, i64)> }
/// struct MyCatalog { rows: Vec<MyRow> }
///
/// // 2. Implement `IntoTable` for your top-level struct.
/// impl IntoTable for MyCatalog {
///     fn into_table(self) -> std::result::Result<TableDefinition, TableConversionError> {
///         let entries = self
///             .rows
///             .into_iter()
///             .map(|row| {
///                 let mut entry = RecipeEntry::new(row.id, row.label, row.lot);
///                 for (component_id, quantity) in row.needs {
///                     entry = entry.with_component(component_id, quantity);
///                 }
///                 entry
///             })
///             .collect();
///
///         Ok(TableDefinition { entries })
///     }
/// }
/// ```
pub trait IntoTable {
    /// Consumes the object and converts it into a kumitate-compatible
    /// recipe table.
    fn into_table(self) -> Result<TableDefinition, TableConversionError>;
}
