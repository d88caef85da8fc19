//! Criteria aggregate for location queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fmt_field;
use crate::filter::{LongFilter, StringFilter};

/// All the filtering options a location query can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationCriteria {
    pub id: Option<LongFilter>,
    pub street_address: Option<StringFilter>,
    pub postal_code: Option<StringFilter>,
    pub city: Option<StringFilter>,
    pub state_province: Option<StringFilter>,
    pub country_id: Option<LongFilter>,
    pub department_id: Option<LongFilter>,
    pub distinct: Option<bool>,
}

impl LocationCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self) -> &mut LongFilter {
        self.id.get_or_insert_with(LongFilter::default)
    }

    pub fn street_address(&mut self) -> &mut StringFilter {
        self.street_address.get_or_insert_with(StringFilter::default)
    }

    pub fn postal_code(&mut self) -> &mut StringFilter {
        self.postal_code.get_or_insert_with(StringFilter::default)
    }

    pub fn city(&mut self) -> &mut StringFilter {
        self.city.get_or_insert_with(StringFilter::default)
    }

    pub fn state_province(&mut self) -> &mut StringFilter {
        self.state_province.get_or_insert_with(StringFilter::default)
    }

    pub fn country_id(&mut self) -> &mut LongFilter {
        self.country_id.get_or_insert_with(LongFilter::default)
    }

    pub fn department_id(&mut self) -> &mut LongFilter {
        self.department_id.get_or_insert_with(LongFilter::default)
    }

    /// Whether join-duplicated rows collapse. Defaults to true when unset.
    pub fn distinct(&self) -> bool {
        self.distinct.unwrap_or(true)
    }
}

impl fmt::Display for LocationCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCriteria{{")?;
        let mut first = true;
        fmt_field(f, &mut first, "id", &self.id)?;
        fmt_field(f, &mut first, "streetAddress", &self.street_address)?;
        fmt_field(f, &mut first, "postalCode", &self.postal_code)?;
        fmt_field(f, &mut first, "city", &self.city)?;
        fmt_field(f, &mut first, "stateProvince", &self.state_province)?;
        fmt_field(f, &mut first, "countryId", &self.country_id)?;
        fmt_field(f, &mut first, "departmentId", &self.department_id)?;
        fmt_field(f, &mut first, "distinct", &self.distinct)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_criteria_renders_empty() {
        assert_eq!(LocationCriteria::new().to_string(), "LocationCriteria{}");
    }

    #[test]
    fn test_copy_of_touched_criteria_is_equal_but_independent() {
        let mut criteria = LocationCriteria::new();
        criteria.city().set_equals("Oslo");

        let mut copy = criteria.clone();
        assert_eq!(copy, criteria);

        copy.city().set_equals("Bergen");
        assert_eq!(
            criteria.city.as_ref().unwrap().equals.as_deref(),
            Some("Oslo")
        );
    }
}
