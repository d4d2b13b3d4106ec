//! Behavior-driven tests for constrained record behavior
//!
//! These tests verify HOW the system gates field writes: construction,
//! later assignment, boundary handling, and the declaration rules.

use stockade_core::{
    stock_record, stock_schema, Record, RuleSet, Schema, ValidationError, Value,
};

// =============================================================================
// Record Construction: Valid Holdings
// =============================================================================

#[test]
fn when_all_fields_are_valid_system_constructs_and_reads_back_values() {
    // Given: a tag under the limit, non-negative shares and price

    // When: the record is constructed
    let record = stock_record("AAPL", 100, 91.1).expect("valid holding must construct");

    // Then: every read returns exactly the supplied value
    assert_eq!(record.get("tag").expect("set"), &Value::Str("AAPL".into()));
    assert_eq!(record.get("shares").expect("set"), &Value::Int(100));
    assert_eq!(record.get("price").expect("set"), &Value::Float(91.1));
    assert!(record.is_complete());
}

#[test]
fn when_fields_are_supplied_by_name_system_validates_in_declaration_order() {
    // Given: pairs arriving out of declaration order
    let schema = stock_schema().expect("demo schema");

    // When: the record is constructed by name
    let record = Record::from_named(
        schema,
        [
            ("price", Value::from(91.1)),
            ("tag", Value::from("AAPL")),
            ("shares", Value::from(100)),
        ],
    )
    .expect("valid holding must construct");

    // Then: the stored values match regardless of supply order
    assert_eq!(record.get("shares").expect("set"), &Value::Int(100));
}

// =============================================================================
// Record Construction: Rejections
// =============================================================================

#[test]
fn when_tag_reaches_the_limit_construction_fails_with_too_long() {
    // Given: a 5-char tag against a strict < 5 limit

    // When: construction is attempted
    let error = stock_record("GOOGL", 100, 91.1).expect_err("must fail");

    // Then: the rejection names the length and the limit
    assert_eq!(
        error,
        ValidationError::TooLong {
            field: "tag".into(),
            len: 5,
            max: 5,
        }
    );
}

#[test]
fn when_shares_are_negative_construction_fails_with_negative_value() {
    let error = stock_record("IBM", -50, 91.1).expect_err("must fail");
    assert_eq!(
        error,
        ValidationError::NegativeValue {
            field: "shares".into(),
        }
    );
}

#[test]
fn when_construction_fails_no_partially_built_record_is_observable() {
    // Given: a valid tag followed by invalid shares
    let schema = stock_schema().expect("demo schema");

    // When: positional construction hits the failing field
    let result = Record::from_values(
        schema,
        [Value::from("IBM"), Value::from(-50), Value::from(91.1)],
    );

    // Then: construction as a whole fails and no instance is returned
    assert!(result.is_err());
}

// =============================================================================
// Assignment: Boundary and Idempotence
// =============================================================================

#[test]
fn when_tag_length_is_one_under_the_limit_assignment_succeeds() {
    let mut record = stock_record("AAPL", 100, 91.1).expect("valid holding");

    // len == 4 passes, len == 5 fails: the bound is strict less-than
    record.set("tag", "MSFT").expect("4 chars must pass");
    let error = record.set("tag", "GOOGL").expect_err("5 chars must fail");
    assert!(matches!(error, ValidationError::TooLong { len: 5, max: 5, .. }));
    assert_eq!(record.get("tag").expect("set"), &Value::Str("MSFT".into()));
}

#[test]
fn when_the_same_valid_value_is_assigned_twice_both_writes_succeed() {
    let mut record = stock_record("AAPL", 100, 91.1).expect("valid holding");

    record.set("shares", 100).expect("first write");
    record.set("shares", 100).expect("second write");

    assert_eq!(record.get("shares").expect("set"), &Value::Int(100));
}

#[test]
fn when_a_write_is_rejected_the_previous_value_survives() {
    let mut record = stock_record("AAPL", 100, 91.1).expect("valid holding");

    let error = record.set("price", Value::from(-0.01)).expect_err("must fail");
    assert!(matches!(error, ValidationError::NegativeValue { .. }));
    assert_eq!(record.get("price").expect("set"), &Value::Float(91.1));
}

// =============================================================================
// Schema Declaration Rules
// =============================================================================

#[test]
fn when_a_field_is_declared_twice_the_last_declaration_wins() {
    // Given: "tag" declared as a plain string, then re-declared with a limit
    let schema = Schema::builder()
        .field("tag", RuleSet::string())
        .field("tag", RuleSet::sized_string(5).expect("valid limit"))
        .build();

    // When: a record write exceeds the re-declared limit
    let mut record = Record::empty(schema);
    let error = record.set("tag", "GOOGL").expect_err("must fail");

    // Then: the later rule set is the one enforced
    assert!(matches!(error, ValidationError::TooLong { .. }));
    record.set("tag", "AAPL").expect("under the limit");
}

#[test]
fn when_a_max_length_rule_has_no_usable_limit_declaration_fails() {
    // Given: a sized-string declaration with a zero limit

    // When: the rule is declared
    let error = RuleSet::sized_string(0).expect_err("must fail");

    // Then: the failure is reported before any schema or record exists
    assert_eq!(
        error,
        ValidationError::MisconfiguredRule {
            rule: "max_length",
            reason: "limit must be at least 1",
        }
    );
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn when_a_complete_record_is_serialized_fields_appear_in_declaration_order() {
    let record = stock_record("AAPL", 100, 91.1).expect("valid holding");
    let json = serde_json::to_string(&record).expect("must serialize");
    assert_eq!(json, r#"{"tag":"AAPL","shares":100,"price":91.1}"#);
}
