use crate::error::{CyclicDependencyError, ScheduleError, UnknownItemError};
use crate::recipe::RecipeStore;
use ahash::AHashMap;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Computes a production order over every item in the store: a permutation
/// of the store's ids in which each recipe's components appear strictly
/// before the recipe itself.
///
/// Kahn's algorithm. The work queue is seeded with all component-free items
/// in the store's insertion order, and dependents are enqueued at the tail
/// as their last component is scheduled, so the relative order of
/// equal-rank items follows the input table, not hash order.
///
/// Fails with [`ScheduleError::UnknownItem`] if any recipe references a
/// component id absent from the store, and with [`ScheduleError::Cycle`]
/// when the graph admits no full order; the cycle error lists every id that
/// could not be scheduled.
pub fn production_order(store: &RecipeStore) -> Result<Vec<String>, ScheduleError> {
    let mut in_degree: IndexMap<&str, usize> = IndexMap::with_capacity(store.len());
    let mut dependents: AHashMap<&str, Vec<&str>> = AHashMap::new();

    for recipe in store.iter() {
        in_degree.insert(recipe.id.as_str(), recipe.components.len());
        for component_id in recipe.components.keys() {
            if !store.contains(component_id) {
                return Err(UnknownItemError::new(component_id.as_str()).into());
            }
            dependents
                .entry(component_id.as_str())
                .or_default()
                .push(recipe.id.as_str());
        }
    }

    let mut queue: VecDeque<&str> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(id, _)| *id)
        .collect();

    let mut order = Vec::with_capacity(store.len());
    while let Some(item_id) = queue.pop_front() {
        order.push(item_id.to_string());

        let Some(waiting) = dependents.get(item_id) else {
            continue;
        };
        for &dependent in waiting {
            if let Some(degree) = in_degree.get_mut(dependent) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(dependent);
                }
            }
        }
    }

    if order.len() < store.len() {
        let unordered = in_degree
            .iter()
            .filter(|(_, degree)| **degree > 0)
            .map(|(id, _)| id.to_string())
            .collect();
        return Err(CyclicDependencyError { unordered }.into());
    }

    Ok(order)
}
