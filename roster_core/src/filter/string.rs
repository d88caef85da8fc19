//! Filter for string fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Parts;

/// Filter for string fields: the equality attributes plus substring matching.
///
/// `contains` is a case-sensitive substring match; `does_not_contain` is its
/// negation over non-null values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StringFilter {
    pub equals: Option<String>,
    pub not_equals: Option<String>,
    #[serde(rename = "in")]
    pub is_in: Option<Vec<String>>,
    pub not_in: Option<Vec<String>>,
    pub specified: Option<bool>,
    pub contains: Option<String>,
    pub does_not_contain: Option<String>,
}

impl StringFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_equals(&mut self, value: impl Into<String>) -> &mut Self {
        self.equals = Some(value.into());
        self
    }

    pub fn set_not_equals(&mut self, value: impl Into<String>) -> &mut Self {
        self.not_equals = Some(value.into());
        self
    }

    pub fn set_in(&mut self, values: Vec<String>) -> &mut Self {
        self.is_in = Some(values);
        self
    }

    pub fn set_not_in(&mut self, values: Vec<String>) -> &mut Self {
        self.not_in = Some(values);
        self
    }

    pub fn set_specified(&mut self, specified: bool) -> &mut Self {
        self.specified = Some(specified);
        self
    }

    pub fn set_contains(&mut self, value: impl Into<String>) -> &mut Self {
        self.contains = Some(value.into());
        self
    }

    pub fn set_does_not_contain(&mut self, value: impl Into<String>) -> &mut Self {
        self.does_not_contain = Some(value.into());
        self
    }
}

impl fmt::Display for StringFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Parts::new();
        parts.push_value("equals", &self.equals);
        parts.push_value("notEquals", &self.not_equals);
        parts.push_list("in", &self.is_in);
        parts.push_list("notIn", &self.not_in);
        parts.push_value("specified", &self.specified);
        parts.push_value("contains", &self.contains);
        parts.push_value("doesNotContain", &self.does_not_contain);
        parts.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_string_filter_has_no_constraints() {
        let filter = StringFilter::new();
        assert_eq!(filter, StringFilter::default());
    }

    #[test]
    fn test_contains_setters_chain() {
        let mut filter = StringFilter::new();
        filter.set_contains("oo").set_does_not_contain("bar");

        assert_eq!(filter.contains.as_deref(), Some("oo"));
        assert_eq!(filter.does_not_contain.as_deref(), Some("bar"));
        assert_eq!(filter.to_string(), "[contains=oo, doesNotContain=bar]");
    }

    #[test]
    fn test_clone_is_deep() {
        let mut filter = StringFilter::new();
        filter.set_in(vec!["A".to_string()]);

        let mut copy = filter.clone();
        copy.is_in.as_mut().unwrap().push("B".to_string());

        assert_eq!(filter.is_in, Some(vec!["A".to_string()]));
    }
}
