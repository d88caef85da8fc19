//! Criteria aggregate for job history queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fmt_field;
use crate::filter::{InstantFilter, LanguageFilter, LongFilter};

/// All the filtering options a job history query can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobHistoryCriteria {
    pub id: Option<LongFilter>,
    pub start_date: Option<InstantFilter>,
    pub end_date: Option<InstantFilter>,
    pub language: Option<LanguageFilter>,
    pub job_id: Option<LongFilter>,
    pub department_id: Option<LongFilter>,
    pub employee_id: Option<LongFilter>,
    pub distinct: Option<bool>,
}

impl JobHistoryCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self) -> &mut LongFilter {
        self.id.get_or_insert_with(LongFilter::default)
    }

    pub fn start_date(&mut self) -> &mut InstantFilter {
        self.start_date.get_or_insert_with(InstantFilter::default)
    }

    pub fn end_date(&mut self) -> &mut InstantFilter {
        self.end_date.get_or_insert_with(InstantFilter::default)
    }

    pub fn language(&mut self) -> &mut LanguageFilter {
        self.language.get_or_insert_with(LanguageFilter::default)
    }

    pub fn job_id(&mut self) -> &mut LongFilter {
        self.job_id.get_or_insert_with(LongFilter::default)
    }

    pub fn department_id(&mut self) -> &mut LongFilter {
        self.department_id.get_or_insert_with(LongFilter::default)
    }

    pub fn employee_id(&mut self) -> &mut LongFilter {
        self.employee_id.get_or_insert_with(LongFilter::default)
    }

    /// Whether join-duplicated rows collapse. Defaults to true when unset.
    pub fn distinct(&self) -> bool {
        self.distinct.unwrap_or(true)
    }
}

impl fmt::Display for JobHistoryCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JobHistoryCriteria{{")?;
        let mut first = true;
        fmt_field(f, &mut first, "id", &self.id)?;
        fmt_field(f, &mut first, "startDate", &self.start_date)?;
        fmt_field(f, &mut first, "endDate", &self.end_date)?;
        fmt_field(f, &mut first, "language", &self.language)?;
        fmt_field(f, &mut first, "jobId", &self.job_id)?;
        fmt_field(f, &mut first, "departmentId", &self.department_id)?;
        fmt_field(f, &mut first, "employeeId", &self.employee_id)?;
        fmt_field(f, &mut first, "distinct", &self.distinct)?;
        write!(f, "}}")
    }
}
