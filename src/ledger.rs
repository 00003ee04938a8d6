use crate::error::UnsupportedOperationError;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sparse accumulator of item quantities, keyed by item id.
///
/// An absent key is equivalent to a quantity of zero, and the representation
/// keeps that invariant in both directions: zero-valued entries are never
/// stored. Ledgers are created fresh per resolution call and composed by the
/// caller; they are never shared between unrelated queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    quantities: AHashMap<String, u64>,
}

impl Ledger {
    /// Creates an empty ledger, the identity element of [`Ledger::merge_add`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the quantity recorded for `item_id`, or 0 if absent.
    pub fn get(&self, item_id: &str) -> u64 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    /// Adds `quantity` to the entry for `item_id`. Adding zero is a no-op,
    /// so the no-zero-entries invariant holds.
    pub fn add(&mut self, item_id: &str, quantity: u64) {
        if quantity == 0 {
            return;
        }
        *self.quantities.entry(item_id.to_string()).or_insert(0) += quantity;
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Iterates entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.quantities.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    /// Iterates entries sorted by item id, for stable rendering.
    pub fn sorted_iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.quantities
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(id, qty)| (id.as_str(), *qty))
    }

    /// Folds `other` into `self` by pointwise addition.
    ///
    /// This is the in-place form of [`Ledger::merge_add`], used when
    /// accumulating many sub-results into one running total.
    pub fn absorb(&mut self, other: Ledger) {
        for (id, qty) in other.quantities {
            if qty > 0 {
                *self.quantities.entry(id).or_insert(0) += qty;
            }
        }
    }

    /// Returns the pointwise sum of two ledgers.
    ///
    /// Commutative and associative, with the empty ledger as identity.
    pub fn merge_add(&self, other: &Ledger) -> Ledger {
        let mut result = self.clone();
        for (id, qty) in other.iter() {
            result.add(id, qty);
        }
        result
    }

    /// Returns the pointwise difference `max(0, self - other)`.
    ///
    /// Entries whose result is exactly zero are dropped, so the output never
    /// carries a zero or negative quantity. Not commutative.
    pub fn merge_sub_floor(&self, other: &Ledger) -> Ledger {
        let mut result = Ledger::new();
        for (id, qty) in self.iter() {
            let remaining = qty.saturating_sub(other.get(id));
            result.add(id, remaining);
        }
        result
    }

    /// Consumes the ledger and returns the underlying map.
    pub fn into_inner(self) -> AHashMap<String, u64> {
        self.quantities
    }
}

impl FromIterator<(String, u64)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        for (id, qty) in iter {
            ledger.add(&id, qty);
        }
        ledger
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .sorted_iter()
            .map(|(id, qty)| format!("{}: {}", id, qty))
            .join(", ");
        write!(f, "{{{}}}", entries)
    }
}

/// A named binary merge operation over two ledgers.
///
/// The wire tokens (`"add"`, `"sub"`) match the operation names accepted at
/// the external boundary; anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOp {
    /// Pointwise addition.
    Add,
    /// Pointwise subtraction, floored at zero.
    SubFloor,
}

impl MergeOp {
    /// Applies the operation to two ledgers, producing a new one.
    pub fn apply(self, a: &Ledger, b: &Ledger) -> Ledger {
        match self {
            MergeOp::Add => a.merge_add(b),
            MergeOp::SubFloor => a.merge_sub_floor(b),
        }
    }
}

impl FromStr for MergeOp {
    type Err = UnsupportedOperationError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "add" => Ok(MergeOp::Add),
            "sub" => Ok(MergeOp::SubFloor),
            other => Err(UnsupportedOperationError {
                operation: other.to_string(),
            }),
        }
    }
}
