//! Unit tests for the quantity ledger and the error taxonomy.
mod common;
use common::*;
use kumitate::error::{
    CyclicDependencyError, MalformedRecipeError, UnknownItemError, UnsupportedOperationError,
};
use kumitate::prelude::*;
use proptest::prelude::*;

#[test]
fn test_empty_ledger_reads_zero() {
    let ledger = Ledger::new();
    assert!(ledger.is_empty());
    assert_eq!(ledger.get("anything"), 0);
}

#[test]
fn test_add_zero_is_dropped() {
    let mut ledger = Ledger::new();
    ledger.add("ore", 0);
    assert!(ledger.is_empty());

    ledger.add("ore", 4);
    ledger.add("ore", 0);
    assert_eq!(ledger.get("ore"), 4);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_merge_add_sums_matching_keys() {
    let a = ledger_of(&[("ore", 3), ("gas", 1)]);
    let b = ledger_of(&[("ore", 2), ("ice", 7)]);

    let merged = a.merge_add(&b);
    assert_eq!(merged.get("ore"), 5);
    assert_eq!(merged.get("gas"), 1);
    assert_eq!(merged.get("ice"), 7);
    assert_eq!(merged.len(), 3);
}

#[test]
fn test_merge_add_identity() {
    let a = ledger_of(&[("ore", 3)]);
    assert_eq!(a.merge_add(&Ledger::new()), a);
    assert_eq!(Ledger::new().merge_add(&a), a);
}

#[test]
fn test_merge_sub_floor_drops_exhausted_keys() {
    let have = ledger_of(&[("ore", 3), ("gas", 5)]);
    let spend = ledger_of(&[("ore", 3), ("gas", 2), ("ice", 9)]);

    let remaining = have.merge_sub_floor(&spend);
    // "ore" hit exactly zero and must not persist; "ice" never goes negative.
    assert_eq!(remaining.get("gas"), 3);
    assert_eq!(remaining.get("ore"), 0);
    assert_eq!(remaining.get("ice"), 0);
    assert_eq!(remaining.len(), 1);
}

#[test]
fn test_merge_sub_floor_not_commutative() {
    let a = ledger_of(&[("ore", 5)]);
    let b = ledger_of(&[("ore", 2)]);
    assert_eq!(a.merge_sub_floor(&b).get("ore"), 3);
    assert!(b.merge_sub_floor(&a).is_empty());
}

#[test]
fn test_absorb_matches_merge_add() {
    let mut accumulator = ledger_of(&[("ore", 1)]);
    let other = ledger_of(&[("ore", 2), ("gas", 4)]);
    let expected = accumulator.merge_add(&other);

    accumulator.absorb(other);
    assert_eq!(accumulator, expected);
}

#[test]
fn test_merge_op_parses_wire_tokens() {
    let a = ledger_of(&[("ore", 5)]);
    let b = ledger_of(&[("ore", 2)]);

    let add: MergeOp = "add".parse().expect("'add' is supported");
    assert_eq!(add.apply(&a, &b).get("ore"), 7);

    let sub: MergeOp = "sub".parse().expect("'sub' is supported");
    assert_eq!(sub.apply(&a, &b).get("ore"), 3);
}

#[test]
fn test_merge_op_rejects_unknown_token() {
    let err = "multiply".parse::<MergeOp>().unwrap_err();
    assert_eq!(
        err,
        UnsupportedOperationError {
            operation: "multiply".to_string()
        }
    );
    assert!(err.to_string().contains("multiply"));
}

#[test]
fn test_ledger_display_is_sorted() {
    let ledger = ledger_of(&[("zinc", 1), ("ore", 2), ("gas", 3)]);
    assert_eq!(format!("{}", ledger), "{gas: 3, ore: 2, zinc: 1}");
}

#[test]
fn test_error_display() {
    let err = MalformedRecipeError::MissingField {
        id: "engine".to_string(),
        field: "typeName",
    };
    assert!(err.to_string().contains("engine"));
    assert!(err.to_string().contains("typeName"));

    let unknown = UnknownItemError::new("tritanium");
    assert!(unknown.to_string().contains("tritanium"));

    let cycle = CyclicDependencyError {
        unordered: vec!["a".to_string(), "b".to_string()],
    };
    assert!(cycle.to_string().contains("2 item(s)"));
    assert!(cycle.to_string().contains("\"a\""));
}

/// Strategy: small ledgers over a narrow id pool so keys collide often.
fn ledger_strategy() -> impl Strategy<Value = Ledger> {
    proptest::collection::hash_map("[a-e]", 0u64..100, 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_merge_add_commutative(a in ledger_strategy(), b in ledger_strategy()) {
        prop_assert_eq!(a.merge_add(&b), b.merge_add(&a));
    }

    #[test]
    fn prop_merge_add_associative(
        a in ledger_strategy(),
        b in ledger_strategy(),
        c in ledger_strategy(),
    ) {
        prop_assert_eq!(a.merge_add(&b).merge_add(&c), a.merge_add(&b.merge_add(&c)));
    }

    #[test]
    fn prop_merge_add_empty_identity(a in ledger_strategy()) {
        prop_assert_eq!(a.merge_add(&Ledger::new()), a);
    }

    #[test]
    fn prop_merge_sub_floor_never_keeps_zero(a in ledger_strategy(), b in ledger_strategy()) {
        let result = a.merge_sub_floor(&b);
        for (id, qty) in result.iter() {
            prop_assert!(qty > 0, "zero-valued key '{}' persisted", id);
        }
    }

    #[test]
    fn prop_merge_sub_floor_bounded_by_minuend(a in ledger_strategy(), b in ledger_strategy()) {
        let result = a.merge_sub_floor(&b);
        for (id, qty) in result.iter() {
            prop_assert!(qty <= a.get(id));
        }
    }
}
