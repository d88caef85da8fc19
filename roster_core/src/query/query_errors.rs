//! Error types for predicate evaluation.

use std::fmt;

/// Errors that can occur while a store evaluates a specification.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Filter value kind doesn't match the field's kind.
    TypeMismatch {
        field: String,
        field_kind: String,
        filter_kind: String,
    },
    /// Operator is not defined for the field's kind.
    UnsupportedOperator {
        field: String,
        kind: String,
        operator: String,
    },
    /// Predicate names a field the entity does not declare.
    UnknownField { entity: String, field: String },
    /// Predicate names a relationship the entity does not declare.
    UnknownRelation { entity: String, relation: String },
}

impl QueryError {
    pub(crate) fn unknown_field(entity: &str, field: &str) -> Self {
        QueryError::UnknownField {
            entity: entity.to_string(),
            field: field.to_string(),
        }
    }

    pub(crate) fn unknown_relation(entity: &str, relation: &str) -> Self {
        QueryError::UnknownRelation {
            entity: entity.to_string(),
            relation: relation.to_string(),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::TypeMismatch {
                field,
                field_kind,
                filter_kind,
            } => {
                write!(
                    f,
                    "Type mismatch: {} field '{}' cannot be compared with {} value",
                    field_kind, field, filter_kind
                )
            }
            QueryError::UnsupportedOperator {
                field,
                kind,
                operator,
            } => {
                write!(
                    f,
                    "Cannot use '{}' on {} field '{}'",
                    operator, kind, field
                )
            }
            QueryError::UnknownField { entity, field } => {
                write!(f, "Entity '{}' declares no field '{}'", entity, field)
            }
            QueryError::UnknownRelation { entity, relation } => {
                write!(f, "Entity '{}' declares no relationship '{}'", entity, relation)
            }
        }
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let error = QueryError::TypeMismatch {
            field: "salary".to_string(),
            field_kind: "Long".to_string(),
            filter_kind: "Text".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Type mismatch: Long field 'salary' cannot be compared with Text value"
        );

        let error = QueryError::unknown_field("Employee", "shoeSize");
        assert_eq!(
            error.to_string(),
            "Entity 'Employee' declares no field 'shoeSize'"
        );
    }
}
