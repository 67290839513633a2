//! Name and value filters.

mod support;

use enumkit::{EnumContract, Value};
use support::{IntStatus, StringStatus, UnitStatus};

#[test]
fn test_only_preserves_declaration_order() {
    assert_eq!(
        StringStatus::only(["COMPLETED", "PENDING"]),
        vec![StringStatus::PENDING, StringStatus::COMPLETED]
    );
}

#[test]
fn test_only_ignores_unknown_names() {
    assert_eq!(
        IntStatus::only(["IN_PROGRESS", "ARCHIVED"]),
        vec![IntStatus::IN_PROGRESS]
    );
    assert!(UnitStatus::only(["ARCHIVED"]).is_empty());
    assert!(UnitStatus::only(Vec::<String>::new()).is_empty());
}

/// Names are matched, never payloads.
#[test]
fn test_only_does_not_match_payloads() {
    assert!(StringStatus::only(["pending"]).is_empty());
}

#[test]
fn test_except_is_complement() {
    assert_eq!(
        StringStatus::except(["IN_PROGRESS"]),
        vec![StringStatus::PENDING, StringStatus::COMPLETED]
    );
    assert_eq!(
        IntStatus::except(Vec::<&str>::new()),
        IntStatus::cases().to_vec()
    );
    assert!(UnitStatus::except(["PENDING", "IN_PROGRESS", "COMPLETED"]).is_empty());
}

#[test]
fn test_only_with_owned_names() {
    let names = vec![String::from("PENDING")];
    assert_eq!(UnitStatus::only(&names), vec![UnitStatus::PENDING]);
}

#[test]
fn test_only_values_strict_vs_loose() {
    assert!(IntStatus::only_values(["1"], true).is_empty());
    assert_eq!(IntStatus::only_values(["1"], false), vec![Value::Int(1)]);
    assert_eq!(
        IntStatus::only_values([3, 1], true),
        vec![Value::Int(1), Value::Int(3)]
    );
}

#[test]
fn test_only_values_string_backed() {
    assert_eq!(
        StringStatus::only_values(["completed", "missing"], true),
        vec![Value::Str("completed")]
    );
    assert!(StringStatus::only_values(["COMPLETED"], false).is_empty());
}

/// Unbacked enums filter on names, since names are their values.
#[test]
fn test_only_values_unbacked() {
    assert_eq!(
        UnitStatus::only_values(["PENDING"], true),
        vec![Value::Str("PENDING")]
    );
}

#[test]
fn test_except_values() {
    assert_eq!(
        IntStatus::except_values(["2"], false),
        vec![Value::Int(1), Value::Int(3)]
    );
    assert_eq!(
        IntStatus::except_values(["2"], true),
        IntStatus::values()
    );
    assert_eq!(
        StringStatus::except_values(["pending", "completed"], true),
        vec![Value::Str("in_progress")]
    );
}

#[test]
fn test_value_filters_accept_mixed_values() {
    let wanted = [Value::Str("2"), Value::Float(3.0)];
    assert_eq!(
        IntStatus::only_values(wanted, false),
        vec![Value::Int(2), Value::Int(3)]
    );
    assert!(IntStatus::only_values(wanted, true).is_empty());
}
