//! Filters for ordered kinds (numbers, instants).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Parts;
use crate::domain::Instant;

/// Filter for ordered kinds: the equality attributes plus range comparisons.
///
/// Range attributes combine independently; setting both `greater_than_or_equal`
/// and `less_than` yields a half-open interval.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeFilter<T> {
    pub equals: Option<T>,
    pub not_equals: Option<T>,
    #[serde(rename = "in")]
    pub is_in: Option<Vec<T>>,
    pub not_in: Option<Vec<T>>,
    pub specified: Option<bool>,
    pub greater_than: Option<T>,
    pub less_than: Option<T>,
    pub greater_than_or_equal: Option<T>,
    pub less_than_or_equal: Option<T>,
}

/// Filter over `i64` fields, including identities.
pub type LongFilter = RangeFilter<i64>;

/// Filter over temporal fields.
pub type InstantFilter = RangeFilter<Instant>;

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            equals: None,
            not_equals: None,
            is_in: None,
            not_in: None,
            specified: None,
            greater_than: None,
            less_than: None,
            greater_than_or_equal: None,
            less_than_or_equal: None,
        }
    }
}

impl<T> RangeFilter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_equals(&mut self, value: T) -> &mut Self {
        self.equals = Some(value);
        self
    }

    pub fn set_not_equals(&mut self, value: T) -> &mut Self {
        self.not_equals = Some(value);
        self
    }

    pub fn set_in(&mut self, values: Vec<T>) -> &mut Self {
        self.is_in = Some(values);
        self
    }

    pub fn set_not_in(&mut self, values: Vec<T>) -> &mut Self {
        self.not_in = Some(values);
        self
    }

    pub fn set_specified(&mut self, specified: bool) -> &mut Self {
        self.specified = Some(specified);
        self
    }

    pub fn set_greater_than(&mut self, value: T) -> &mut Self {
        self.greater_than = Some(value);
        self
    }

    pub fn set_less_than(&mut self, value: T) -> &mut Self {
        self.less_than = Some(value);
        self
    }

    pub fn set_greater_than_or_equal(&mut self, value: T) -> &mut Self {
        self.greater_than_or_equal = Some(value);
        self
    }

    pub fn set_less_than_or_equal(&mut self, value: T) -> &mut Self {
        self.less_than_or_equal = Some(value);
        self
    }
}

impl<T: fmt::Display> fmt::Display for RangeFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Parts::new();
        parts.push_value("equals", &self.equals);
        parts.push_value("notEquals", &self.not_equals);
        parts.push_list("in", &self.is_in);
        parts.push_list("notIn", &self.not_in);
        parts.push_value("specified", &self.specified);
        parts.push_value("greaterThan", &self.greater_than);
        parts.push_value("greaterThanOrEqual", &self.greater_than_or_equal);
        parts.push_value("lessThan", &self.less_than);
        parts.push_value("lessThanOrEqual", &self.less_than_or_equal);
        parts.finish(f)
    }
}
