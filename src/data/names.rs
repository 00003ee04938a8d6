use crate::ledger::Ledger;
use crate::recipe::RecipeStore;
use ahash::AHashMap;

/// Bidirectional translation between item ids and display names.
///
/// Built from the store's own recipe names, so there is a single source of
/// truth. Used only at the boundary; the engine operates exclusively on
/// item ids. If two recipes share a display name, the later one wins the
/// name-to-id direction.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    id_to_name: AHashMap<String, String>,
    name_to_id: AHashMap<String, String>,
}

impl NameIndex {
    pub fn from_store(store: &RecipeStore) -> Self {
        let mut index = Self::default();
        for recipe in store.iter() {
            index
                .id_to_name
                .insert(recipe.id.clone(), recipe.name.clone());
            index
                .name_to_id
                .insert(recipe.name.clone(), recipe.id.clone());
        }
        index
    }

    pub fn name_for(&self, item_id: &str) -> Option<&str> {
        self.id_to_name.get(item_id).map(String::as_str)
    }

    pub fn id_for(&self, name: &str) -> Option<&str> {
        self.name_to_id.get(name).map(String::as_str)
    }

    /// Re-keys a ledger by display name for presentation. An id with no
    /// known name keeps the id as its key.
    pub fn keyed_by_name(&self, ledger: &Ledger) -> Ledger {
        ledger
            .iter()
            .map(|(id, qty)| {
                let key = self.name_for(id).unwrap_or(id);
                (key.to_string(), qty)
            })
            .collect()
    }
}
