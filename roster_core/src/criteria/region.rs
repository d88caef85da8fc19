//! Criteria aggregate for region queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fmt_field;
use crate::filter::{LongFilter, StringFilter};

/// All the filtering options a region query can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionCriteria {
    pub id: Option<LongFilter>,
    pub region_name: Option<StringFilter>,
    pub country_id: Option<LongFilter>,
    pub distinct: Option<bool>,
}

impl RegionCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self) -> &mut LongFilter {
        self.id.get_or_insert_with(LongFilter::default)
    }

    pub fn region_name(&mut self) -> &mut StringFilter {
        self.region_name.get_or_insert_with(StringFilter::default)
    }

    pub fn country_id(&mut self) -> &mut LongFilter {
        self.country_id.get_or_insert_with(LongFilter::default)
    }

    /// Whether join-duplicated rows collapse. Defaults to true when unset.
    pub fn distinct(&self) -> bool {
        self.distinct.unwrap_or(true)
    }
}

impl fmt::Display for RegionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionCriteria{{")?;
        let mut first = true;
        fmt_field(f, &mut first, "id", &self.id)?;
        fmt_field(f, &mut first, "regionName", &self.region_name)?;
        fmt_field(f, &mut first, "countryId", &self.country_id)?;
        fmt_field(f, &mut first, "distinct", &self.distinct)?;
        write!(f, "}}")
    }
}
