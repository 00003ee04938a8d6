use crate::error::{TableConversionError, TableLoadError};
use crate::recipe::{IntoTable, RecipeEntry, TableDefinition};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// One record of the raw recipe table, matching the expected JSON format.
///
/// Required fields are `Option`s so that a record with a missing field still
/// parses; the omission is reported with its recipe id when the store is
/// built. Any metadata beyond the recognized fields (icon ids, market
/// groups, tier levels, ...) is captured opaquely in `extra` and carried
/// through untouched; the engine itself never reads it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawRecipeRecord {
    #[serde(rename = "typeName", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Produced quantity per production cycle. The table format also
    /// accepts the key `batch_size` for this field; such keys are parked in
    /// `extra` and promoted during conversion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_size: Option<i64>,

    /// Component id -> quantity per batch. A missing key is equivalent to
    /// an empty map: the item is a leaf.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<IndexMap<String, i64>>,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// The raw recipe table as stored on disk: a JSON object mapping each item
/// id to its [`RawRecipeRecord`]. Key order is preserved, and becomes the
/// store's insertion order after conversion.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct RawTable {
    pub records: IndexMap<String, RawRecipeRecord>,
}

impl RawTable {
    /// Loads a raw table from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TableLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TableLoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        content.parse()
    }
}

impl FromStr for RawTable {
    type Err = TableLoadError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(json).map_err(|e| TableLoadError::JsonParseError(e.to_string()))
    }
}

impl IntoTable for RawTable {
    fn into_table(self) -> Result<TableDefinition, TableConversionError> {
        let entries = self
            .records
            .into_iter()
            .map(|(id, record)| {
                // `batch_size` is an accepted spelling of `unit_size`; it
                // arrives through the opaque catch-all.
                let batch_size = record.unit_size.or_else(|| {
                    record
                        .extra
                        .get("batch_size")
                        .and_then(serde_json::Value::as_i64)
                });
                RecipeEntry {
                    id,
                    name: record.type_name,
                    batch_size,
                    components: record
                        .components
                        .unwrap_or_default()
                        .into_iter()
                        .collect(),
                }
            })
            .collect();

        Ok(TableDefinition { entries })
    }
}
