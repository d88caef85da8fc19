//! Typed filter value objects, one shape per scalar kind.
//!
//! A filter describes the constraints a caller wants on a single field. Every
//! attribute is optional; a filter with no attribute set places no constraint
//! at all. Attributes set together are combined with logical AND by the
//! predicate builder.

mod range;
mod string;

pub use range::{InstantFilter, LongFilter, RangeFilter};
pub use string::StringFilter;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Language;

/// Filter for equality-only kinds (booleans, enums, identities).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filter<T> {
    pub equals: Option<T>,
    pub not_equals: Option<T>,
    #[serde(rename = "in")]
    pub is_in: Option<Vec<T>>,
    pub not_in: Option<Vec<T>>,
    pub specified: Option<bool>,
}

/// Filter over boolean fields.
pub type BooleanFilter = Filter<bool>;

/// Filter over [`Language`] fields.
pub type LanguageFilter = Filter<Language>;

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self {
            equals: None,
            not_equals: None,
            is_in: None,
            not_in: None,
            specified: None,
        }
    }
}

impl<T> Filter<T> {
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
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Parts::new();
        parts.push_value("equals", &self.equals);
        parts.push_value("notEquals", &self.not_equals);
        parts.push_list("in", &self.is_in);
        parts.push_list("notIn", &self.not_in);
        parts.push_value("specified", &self.specified);
        parts.finish(f)
    }
}

/// Accumulates the present attributes of a filter for display.
pub(crate) struct Parts {
    rendered: Vec<String>,
}

impl Parts {
    pub(crate) fn new() -> Self {
        Self {
            rendered: Vec::new(),
        }
    }

    pub(crate) fn push_value<T: fmt::Display>(&mut self, name: &str, value: &Option<T>) {
        if let Some(value) = value {
            self.rendered.push(format!("{}={}", name, value));
        }
    }

    pub(crate) fn push_list<T: fmt::Display>(&mut self, name: &str, values: &Option<Vec<T>>) {
        if let Some(values) = values {
            let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            self.rendered.push(format!("{}=[{}]", name, joined.join(", ")));
        }
    }

    pub(crate) fn finish(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.rendered.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_filter_has_no_constraints() {
        let filter: BooleanFilter = Filter::new();
        assert_eq!(filter.equals, None);
        assert_eq!(filter.not_equals, None);
        assert_eq!(filter.is_in, None);
        assert_eq!(filter.not_in, None);
        assert_eq!(filter.specified, None);
    }

    #[test]
    fn test_setters_chain() {
        let mut filter: Filter<Language> = Filter::new();
        filter
            .set_equals(Language::French)
            .set_specified(true);

        assert_eq!(filter.equals, Some(Language::French));
        assert_eq!(filter.specified, Some(true));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut filter: Filter<i64> = Filter::new();
        filter.set_in(vec![1, 2]);

        let mut copy = filter.clone();
        assert_eq!(copy, filter);

        copy.is_in.as_mut().unwrap().push(3);
        assert_eq!(filter.is_in, Some(vec![1, 2]));
        assert_ne!(copy, filter);
    }

    #[test]
    fn test_display_lists_present_attributes_only() {
        let mut filter: Filter<Language> = Filter::new();
        assert_eq!(filter.to_string(), "[]");

        filter.set_equals(Language::English).set_not_in(vec![Language::French]);
        assert_eq!(filter.to_string(), "[equals=ENGLISH, notIn=[FRENCH]]");
    }

    #[test]
    fn test_serde_uses_wire_attribute_names() {
        let filter: Filter<i64> =
            serde_json::from_str(r#"{"in": [1, 2], "notEquals": 3}"#).unwrap();
        assert_eq!(filter.is_in, Some(vec![1, 2]));
        assert_eq!(filter.not_equals, Some(3));
    }
}
