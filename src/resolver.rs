use crate::error::UnknownItemError;
use crate::ledger::Ledger;
use crate::recipe::RecipeStore;

/// How a requested quantity is converted into a whole number of production
/// batches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchRounding {
    /// `ceil(quantity / batch_size)`: the produced amount is never short of
    /// the request, at the cost of possible small overproduction. This is
    /// the default and the documented semantics of the engine.
    #[default]
    Ceil,
    /// Round to the nearest batch count, halves up. Opt-in, for deployments
    /// that accept undershooting the request in exchange for less
    /// overproduction.
    Nearest,
}

impl BatchRounding {
    /// Number of batches of a `batch_size`-sized recipe needed for
    /// `quantity` units.
    fn batches(self, quantity: u64, batch_size: u64) -> u64 {
        match self {
            BatchRounding::Ceil => quantity.div_ceil(batch_size),
            BatchRounding::Nearest => (quantity + batch_size / 2) / batch_size,
        }
    }
}

/// Resolves the total raw-material requirements for producing a quantity of
/// an item, by walking the recipe graph recursively.
///
/// A `Resolver` borrows the store read-only and holds no other state, so it
/// can be used repeatedly and shared freely across queries. Each call to
/// [`Resolver::resolve`] produces a fresh [`Ledger`].
pub struct Resolver<'s> {
    store: &'s RecipeStore,
    rounding: BatchRounding,
}

impl<'s> Resolver<'s> {
    /// Creates a resolver with the default [`BatchRounding::Ceil`] policy.
    pub fn new(store: &'s RecipeStore) -> Self {
        Self {
            store,
            rounding: BatchRounding::default(),
        }
    }

    /// Selects a different batch rounding policy.
    pub fn with_rounding(mut self, rounding: BatchRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Computes the ledger of leaf (raw) quantities needed to produce
    /// `quantity` units of `item_id`.
    ///
    /// Only leaves appear in the output; intermediate items are implied by
    /// the expansion but never listed. Every id touched by the walk must
    /// exist in the store (including true raw materials, which are
    /// represented as zero-component recipes), otherwise the resolution
    /// fails with [`UnknownItemError`].
    ///
    /// Recursion depth is bounded by the depth of the recipe graph. The
    /// graph is assumed acyclic; no cycle detection is performed here (run
    /// [`production_order`](crate::schedule::production_order) to verify a
    /// store first if its provenance is untrusted).
    pub fn resolve(&self, item_id: &str, quantity: u64) -> Result<Ledger, UnknownItemError> {
        let recipe = self.store.get(item_id)?;

        if recipe.is_leaf() {
            let mut ledger = Ledger::new();
            ledger.add(item_id, quantity);
            return Ok(ledger);
        }

        // One batch count covers every component of this recipe.
        let batches = self.rounding.batches(quantity, recipe.batch_size);

        let mut accumulator = Ledger::new();
        for (component_id, per_batch_qty) in &recipe.components {
            let sub_ledger = self.resolve(component_id, batches * per_batch_qty)?;
            accumulator.absorb(sub_ledger);
        }
        Ok(accumulator)
    }
}
