//! Generic translation from filter value objects to predicates.
//!
//! One builder per filter shape, plus the relationship form. Each translates
//! every present attribute into a condition and ANDs them together; an empty
//! filter yields [`Predicate::Always`].

use crate::domain::FieldValue;
use crate::filter::{Filter, LongFilter, RangeFilter, StringFilter};
use crate::query::{Condition, Predicate};

/// Build the predicate for an equality-only filter on one of the entity's
/// own fields.
pub fn build_specification<T>(filter: &Filter<T>, field: &'static str) -> Predicate
where
    T: Clone + Into<FieldValue>,
{
    compose(field, equality_conditions(filter), Predicate::field)
}

/// Build the predicate for an ordered filter on one of the entity's own
/// fields.
pub fn build_range_specification<T>(filter: &RangeFilter<T>, field: &'static str) -> Predicate
where
    T: Clone + Into<FieldValue>,
{
    compose(field, range_conditions(filter), Predicate::field)
}

/// Build the predicate for a string filter on one of the entity's own fields.
pub fn build_string_specification(filter: &StringFilter, field: &'static str) -> Predicate {
    compose(field, string_conditions(filter), Predicate::field)
}

/// Build the predicate for an identity filter over a named relationship.
///
/// Each condition is applied to the related rows' ids with LEFT-join
/// semantics, so rows without a related row are still reachable (and match
/// when the filter asks for `specified=false`).
pub fn build_reference_specification(filter: &LongFilter, relation: &'static str) -> Predicate {
    compose(relation, range_conditions(filter), Predicate::joined)
}

fn compose(
    target: &'static str,
    conditions: Vec<Condition>,
    wrap: fn(&'static str, Condition) -> Predicate,
) -> Predicate {
    conditions
        .into_iter()
        .fold(Predicate::Always, |predicate, condition| {
            predicate.and(wrap(target, condition))
        })
}

fn equality_conditions<T>(filter: &Filter<T>) -> Vec<Condition>
where
    T: Clone + Into<FieldValue>,
{
    let mut conditions = Vec::new();
    if let Some(value) = &filter.equals {
        conditions.push(Condition::Eq(value.clone().into()));
    }
    if let Some(value) = &filter.not_equals {
        conditions.push(Condition::Ne(value.clone().into()));
    }
    if let Some(values) = &filter.is_in {
        conditions.push(Condition::In(into_values(values)));
    }
    if let Some(values) = &filter.not_in {
        conditions.push(Condition::NotIn(into_values(values)));
    }
    if let Some(specified) = filter.specified {
        conditions.push(Condition::Specified(specified));
    }
    conditions
}

fn range_conditions<T>(filter: &RangeFilter<T>) -> Vec<Condition>
where
    T: Clone + Into<FieldValue>,
{
    let mut conditions = Vec::new();
    if let Some(value) = &filter.equals {
        conditions.push(Condition::Eq(value.clone().into()));
    }
    if let Some(value) = &filter.not_equals {
        conditions.push(Condition::Ne(value.clone().into()));
    }
    if let Some(values) = &filter.is_in {
        conditions.push(Condition::In(into_values(values)));
    }
    if let Some(values) = &filter.not_in {
        conditions.push(Condition::NotIn(into_values(values)));
    }
    if let Some(specified) = filter.specified {
        conditions.push(Condition::Specified(specified));
    }
    if let Some(value) = &filter.greater_than {
        conditions.push(Condition::GreaterThan(value.clone().into()));
    }
    if let Some(value) = &filter.greater_than_or_equal {
        conditions.push(Condition::GreaterThanOrEqual(value.clone().into()));
    }
    if let Some(value) = &filter.less_than {
        conditions.push(Condition::LessThan(value.clone().into()));
    }
    if let Some(value) = &filter.less_than_or_equal {
        conditions.push(Condition::LessThanOrEqual(value.clone().into()));
    }
    conditions
}

fn string_conditions(filter: &StringFilter) -> Vec<Condition> {
    let mut conditions = Vec::new();
    if let Some(value) = &filter.equals {
        conditions.push(Condition::Eq(value.clone().into()));
    }
    if let Some(value) = &filter.not_equals {
        conditions.push(Condition::Ne(value.clone().into()));
    }
    if let Some(values) = &filter.is_in {
        conditions.push(Condition::In(into_values(values)));
    }
    if let Some(values) = &filter.not_in {
        conditions.push(Condition::NotIn(into_values(values)));
    }
    if let Some(specified) = filter.specified {
        conditions.push(Condition::Specified(specified));
    }
    if let Some(value) = &filter.contains {
        conditions.push(Condition::Contains(value.clone()));
    }
    if let Some(value) = &filter.does_not_contain {
        conditions.push(Condition::DoesNotContain(value.clone()));
    }
    conditions
}

fn into_values<T>(values: &[T]) -> Vec<FieldValue>
where
    T: Clone + Into<FieldValue>,
{
    values.iter().cloned().map(Into::into).collect()
}
