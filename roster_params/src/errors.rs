//! Errors reported while decoding filter parameters.

use std::fmt;

/// Defines the errors you might encounter decoding filter parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// Key names a field the entity does not declare.
    UnknownField {
        entity: &'static str,
        field: String,
    },
    /// Key has no `.operator` suffix (and is not the bare `distinct` flag).
    MissingOperator { key: String },
    /// Operator suffix is not part of the filter vocabulary.
    UnknownOperator { field: String, operator: String },
    /// Value cannot be parsed as the field's kind.
    InvalidFilterValue {
        field: String,
        kind: &'static str,
        value: String,
    },
    /// Operator exists but is not defined for the field's kind.
    UnsupportedOperator {
        field: String,
        kind: &'static str,
        operator: &'static str,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::UnknownField { entity, field } => {
                write!(f, "{} has no filterable field '{}'", entity, field)
            }
            ParamError::MissingOperator { key } => {
                write!(f, "Parameter '{}' is missing an operator suffix", key)
            }
            ParamError::UnknownOperator { field, operator } => {
                write!(f, "Unknown operator '{}' on field '{}'", operator, field)
            }
            ParamError::InvalidFilterValue { field, kind, value } => {
                write!(
                    f,
                    "Value '{}' for field '{}' is not a valid {}",
                    value, field, kind
                )
            }
            ParamError::UnsupportedOperator {
                field,
                kind,
                operator,
            } => {
                write!(
                    f,
                    "Operator '{}' is not defined for {} field '{}'",
                    operator, kind, field
                )
            }
        }
    }
}

impl std::error::Error for ParamError {}
