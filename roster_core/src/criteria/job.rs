//! Criteria aggregate for job queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fmt_field;
use crate::filter::{LongFilter, StringFilter};

/// All the filtering options a job query can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobCriteria {
    pub id: Option<LongFilter>,
    pub job_title: Option<StringFilter>,
    pub min_salary: Option<LongFilter>,
    pub max_salary: Option<LongFilter>,
    pub task_id: Option<LongFilter>,
    pub employee_id: Option<LongFilter>,
    pub job_history_id: Option<LongFilter>,
    pub distinct: Option<bool>,
}

impl JobCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self) -> &mut LongFilter {
        self.id.get_or_insert_with(LongFilter::default)
    }

    pub fn job_title(&mut self) -> &mut StringFilter {
        self.job_title.get_or_insert_with(StringFilter::default)
    }

    pub fn min_salary(&mut self) -> &mut LongFilter {
        self.min_salary.get_or_insert_with(LongFilter::default)
    }

    pub fn max_salary(&mut self) -> &mut LongFilter {
        self.max_salary.get_or_insert_with(LongFilter::default)
    }

    pub fn task_id(&mut self) -> &mut LongFilter {
        self.task_id.get_or_insert_with(LongFilter::default)
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

impl fmt::Display for JobCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JobCriteria{{")?;
        let mut first = true;
        fmt_field(f, &mut first, "id", &self.id)?;
        fmt_field(f, &mut first, "jobTitle", &self.job_title)?;
        fmt_field(f, &mut first, "minSalary", &self.min_salary)?;
        fmt_field(f, &mut first, "maxSalary", &self.max_salary)?;
        fmt_field(f, &mut first, "taskId", &self.task_id)?;
        fmt_field(f, &mut first, "employeeId", &self.employee_id)?;
        fmt_field(f, &mut first, "jobHistoryId", &self.job_history_id)?;
        fmt_field(f, &mut first, "distinct", &self.distinct)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch_all(criteria: &mut JobCriteria) {
        criteria.id();
        criteria.job_title();
        criteria.min_salary();
        criteria.max_salary();
        criteria.task_id();
        criteria.employee_id();
        criteria.job_history_id();
    }

    #[test]
    fn test_new_criteria_renders_empty() {
        let criteria = JobCriteria::new();
        assert_eq!(criteria.to_string(), "JobCriteria{}");
    }

    #[test]
    fn test_accessors_materialize_filters() {
        let mut criteria = JobCriteria::new();
        touch_all(&mut criteria);

        assert!(criteria.id.is_some());
        assert!(criteria.job_title.is_some());
        assert!(criteria.min_salary.is_some());
        assert!(criteria.max_salary.is_some());
        assert!(criteria.task_id.is_some());
        assert!(criteria.employee_id.is_some());
        assert!(criteria.job_history_id.is_some());
    }

    #[test]
    fn test_copy_duplicates_filters_independently() {
        let mut criteria = JobCriteria::new();
        touch_all(&mut criteria);

        let mut copy = criteria.clone();
        assert_eq!(copy, criteria);

        copy.task_id().set_equals(9);
        assert_eq!(criteria.task_id.as_ref().unwrap().equals, None);
        assert_ne!(copy, criteria);
    }

    #[test]
    fn test_display_includes_distinct_when_set() {
        let mut criteria = JobCriteria::new();
        criteria.job_title().set_contains("Engineer");
        criteria.distinct = Some(false);

        assert_eq!(
            criteria.to_string(),
            "JobCriteria{jobTitle=[contains=Engineer], distinct=false}"
        );
    }
}
