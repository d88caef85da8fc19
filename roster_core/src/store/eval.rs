//! NULL-aware evaluation of a single condition against a field value.
//!
//! Follows SQL three-valued logic: a null field satisfies only
//! `Specified(false)`. `Ne`, `NotIn` and `DoesNotContain` require a non-null
//! value; `In` over an empty set matches nothing.

use std::cmp::Ordering;

use crate::domain::FieldValue;
use crate::query::{Condition, QueryError};

/// Evaluate one condition against a field's value (`None` = null field).
pub(crate) fn eval(
    field: &str,
    value: Option<&FieldValue>,
    condition: &Condition,
) -> Result<bool, QueryError> {
    match (condition, value) {
        (Condition::Specified(required), value) => Ok(*required == value.is_some()),
        (_, None) => Ok(false),
        (Condition::Eq(other), Some(value)) => equals(field, value, other),
        (Condition::Ne(other), Some(value)) => Ok(!equals(field, value, other)?),
        (Condition::In(others), Some(value)) => {
            for other in others {
                if equals(field, value, other)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        (Condition::NotIn(others), Some(value)) => {
            for other in others {
                if equals(field, value, other)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Condition::GreaterThan(other), Some(value)) => {
            Ok(compare(field, value, other, "greaterThan")? == Ordering::Greater)
        }
        (Condition::LessThan(other), Some(value)) => {
            Ok(compare(field, value, other, "lessThan")? == Ordering::Less)
        }
        (Condition::GreaterThanOrEqual(other), Some(value)) => {
            Ok(compare(field, value, other, "greaterThanOrEqual")? != Ordering::Less)
        }
        (Condition::LessThanOrEqual(other), Some(value)) => {
            Ok(compare(field, value, other, "lessThanOrEqual")? != Ordering::Greater)
        }
        (Condition::Contains(needle), Some(value)) => substring(field, value, needle, "contains"),
        (Condition::DoesNotContain(needle), Some(value)) => {
            Ok(!substring(field, value, needle, "doesNotContain")?)
        }
    }
}

fn equals(field: &str, value: &FieldValue, other: &FieldValue) -> Result<bool, QueryError> {
    if value.kind() != other.kind() {
        return Err(QueryError::TypeMismatch {
            field: field.to_string(),
            field_kind: value.kind().to_string(),
            filter_kind: other.kind().to_string(),
        });
    }
    Ok(value == other)
}

fn compare(
    field: &str,
    value: &FieldValue,
    other: &FieldValue,
    operator: &str,
) -> Result<Ordering, QueryError> {
    match (value, other) {
        (FieldValue::Long(a), FieldValue::Long(b)) => Ok(a.cmp(b)),
        (FieldValue::Instant(a), FieldValue::Instant(b)) => Ok(a.cmp(b)),
        (value, other) if value.kind() != other.kind() => Err(QueryError::TypeMismatch {
            field: field.to_string(),
            field_kind: value.kind().to_string(),
            filter_kind: other.kind().to_string(),
        }),
        (value, _) => Err(QueryError::UnsupportedOperator {
            field: field.to_string(),
            kind: value.kind().to_string(),
            operator: operator.to_string(),
        }),
    }
}

fn substring(
    field: &str,
    value: &FieldValue,
    needle: &str,
    operator: &str,
) -> Result<bool, QueryError> {
    match value {
        FieldValue::Text(text) => Ok(text.contains(needle)),
        other => Err(QueryError::UnsupportedOperator {
            field: field.to_string(),
            kind: other.kind().to_string(),
            operator: operator.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::domain::Language;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn test_specified_checks_presence() {
        let value = FieldValue::Long(1);
        assert!(eval("f", Some(&value), &Condition::Specified(true)).unwrap());
        assert!(!eval("f", Some(&value), &Condition::Specified(false)).unwrap());
        assert!(eval("f", None, &Condition::Specified(false)).unwrap());
        assert!(!eval("f", None, &Condition::Specified(true)).unwrap());
    }

    #[test]
    fn test_null_field_matches_nothing_but_specified_false() {
        for condition in [
            Condition::Eq(FieldValue::Long(1)),
            Condition::Ne(FieldValue::Long(1)),
            Condition::In(vec![FieldValue::Long(1)]),
            Condition::NotIn(vec![FieldValue::Long(1)]),
            Condition::GreaterThan(FieldValue::Long(0)),
            Condition::Contains("x".to_string()),
            Condition::DoesNotContain("x".to_string()),
        ] {
            assert!(!eval("f", None, &condition).unwrap());
        }
    }

    #[test]
    fn test_equality_and_negation() {
        let value = text("A");
        assert!(eval("f", Some(&value), &Condition::Eq(text("A"))).unwrap());
        assert!(!eval("f", Some(&value), &Condition::Eq(text("B"))).unwrap());
        assert!(eval("f", Some(&value), &Condition::Ne(text("B"))).unwrap());
        assert!(!eval("f", Some(&value), &Condition::Ne(text("A"))).unwrap());
    }

    #[test]
    fn test_in_over_empty_set_matches_nothing() {
        let value = FieldValue::Long(5);
        assert!(!eval("f", Some(&value), &Condition::In(Vec::new())).unwrap());
        assert!(eval("f", Some(&value), &Condition::NotIn(Vec::new())).unwrap());
    }

    #[test]
    fn test_in_and_not_in_are_complements_over_non_null() {
        let members = vec![text("A"), text("B")];
        for candidate in ["A", "B", "C"] {
            let value = text(candidate);
            let is_in = eval("f", Some(&value), &Condition::In(members.clone())).unwrap();
            let not_in = eval("f", Some(&value), &Condition::NotIn(members.clone())).unwrap();
            assert_ne!(is_in, not_in);
        }
    }

    #[test]
    fn test_range_operators_on_longs() {
        let value = FieldValue::Long(5);
        assert!(eval("f", Some(&value), &Condition::GreaterThanOrEqual(FieldValue::Long(5))).unwrap());
        assert!(eval("f", Some(&value), &Condition::LessThan(FieldValue::Long(10))).unwrap());
        assert!(!eval("f", Some(&value), &Condition::GreaterThan(FieldValue::Long(5))).unwrap());
        assert!(eval("f", Some(&value), &Condition::LessThanOrEqual(FieldValue::Long(5))).unwrap());
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let value = text("book");
        assert!(eval("f", Some(&value), &Condition::Contains("oo".to_string())).unwrap());
        assert!(!eval("f", Some(&value), &Condition::Contains("OO".to_string())).unwrap());
        assert!(eval("f", Some(&value), &Condition::DoesNotContain("ar".to_string())).unwrap());
        assert!(!eval("f", Some(&value), &Condition::DoesNotContain("oo".to_string())).unwrap());
    }

    #[test]
    fn test_kind_mismatch_is_an_error() {
        let value = FieldValue::Long(5);
        assert_matches!(
            eval("f", Some(&value), &Condition::Eq(text("5"))),
            Err(QueryError::TypeMismatch { .. })
        );
        assert_matches!(
            eval(
                "f",
                Some(&value),
                &Condition::GreaterThan(FieldValue::Instant(chrono::DateTime::UNIX_EPOCH))
            ),
            Err(QueryError::TypeMismatch { .. })
        );
    }

    #[test]
    fn test_unordered_kinds_reject_range_operators() {
        let value = FieldValue::Language(Language::French);
        assert_matches!(
            eval(
                "f",
                Some(&value),
                &Condition::GreaterThan(FieldValue::Language(Language::English))
            ),
            Err(QueryError::UnsupportedOperator { .. })
        );
    }

    #[test]
    fn test_substring_on_non_text_is_unsupported() {
        let value = FieldValue::Long(5);
        assert_matches!(
            eval("f", Some(&value), &Condition::Contains("5".to_string())),
            Err(QueryError::UnsupportedOperator { .. })
        );
    }
}
