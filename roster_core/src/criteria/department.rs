//! Criteria aggregate for department queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fmt_field;
use crate::filter::{LongFilter, StringFilter};

/// All the filtering options a department query can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentCriteria {
    pub id: Option<LongFilter>,
    pub department_name: Option<StringFilter>,
    pub location_id: Option<LongFilter>,
    pub employee_id: Option<LongFilter>,
    pub job_history_id: Option<LongFilter>,
    pub distinct: Option<bool>,
}

impl DepartmentCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self) -> &mut LongFilter {
        self.id.get_or_insert_with(LongFilter::default)
    }

    pub fn department_name(&mut self) -> &mut StringFilter {
        self.department_name.get_or_insert_with(StringFilter::default)
    }

    pub fn location_id(&mut self) -> &mut LongFilter {
        self.location_id.get_or_insert_with(LongFilter::default)
    }

    pub fn employee_id(&mut self) -> &mut LongFilter {
        self.employee_id.get_or_insert_with(LongFilter::default)
    }

    pub fn job_history_id(&mut self) -> &mut LongFilter {
        self.job_history_id.get_or_insert_with(LongFilter::default)
    }

    /// Whether join-duplicated rows collapse. Defaults to true when unset.
    pub fn distinct(&self) -> bool {
        self.distinct.unwrap_or(true)
    }
}

impl fmt::Display for DepartmentCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepartmentCriteria{{")?;
        let mut first = true;
        fmt_field(f, &mut first, "id", &self.id)?;
        fmt_field(f, &mut first, "departmentName", &self.department_name)?;
        fmt_field(f, &mut first, "locationId", &self.location_id)?;
        fmt_field(f, &mut first, "employeeId", &self.employee_id)?;
        fmt_field(f, &mut first, "jobHistoryId", &self.job_history_id)?;
        fmt_field(f, &mut first, "distinct", &self.distinct)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_criteria_renders_empty() {
        assert_eq!(
            DepartmentCriteria::new().to_string(),
            "DepartmentCriteria{}"
        );
    }

    #[test]
    fn test_accessors_materialize_filters() {
        let mut criteria = DepartmentCriteria::new();
        criteria.department_name();
        criteria.employee_id();

        assert!(criteria.department_name.is_some());
        assert!(criteria.employee_id.is_some());
        assert!(criteria.location_id.is_none());
    }
}
