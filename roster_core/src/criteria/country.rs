//! Criteria aggregate for country queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fmt_field;
use crate::filter::{LongFilter, StringFilter};

/// All the filtering options a country query can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryCriteria {
    pub id: Option<LongFilter>,
    pub country_name: Option<StringFilter>,
    pub region_id: Option<LongFilter>,
    pub location_id: Option<LongFilter>,
    pub distinct: Option<bool>,
}

impl CountryCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self) -> &mut LongFilter {
        self.id.get_or_insert_with(LongFilter::default)
    }

    pub fn country_name(&mut self) -> &mut StringFilter {
        self.country_name.get_or_insert_with(StringFilter::default)
    }

    pub fn region_id(&mut self) -> &mut LongFilter {
        self.region_id.get_or_insert_with(LongFilter::default)
    }

    pub fn location_id(&mut self) -> &mut LongFilter {
        self.location_id.get_or_insert_with(LongFilter::default)
    }

    /// Whether join-duplicated rows collapse. Defaults to true when unset.
    pub fn distinct(&self) -> bool {
        self.distinct.unwrap_or(true)
    }
}

impl fmt::Display for CountryCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCriteria{{")?;
        let mut first = true;
        fmt_field(f, &mut first, "id", &self.id)?;
        fmt_field(f, &mut first, "countryName", &self.country_name)?;
        fmt_field(f, &mut first, "regionId", &self.region_id)?;
        fmt_field(f, &mut first, "locationId", &self.location_id)?;
        fmt_field(f, &mut first, "distinct", &self.distinct)?;
        write!(f, "}}")
    }
}
