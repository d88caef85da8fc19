//! Criteria aggregate for task queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fmt_field;
use crate::filter::{LongFilter, StringFilter};

/// All the filtering options a task query can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskCriteria {
    pub id: Option<LongFilter>,
    pub title: Option<StringFilter>,
    pub description: Option<StringFilter>,
    pub job_id: Option<LongFilter>,
    pub distinct: Option<bool>,
}

impl TaskCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self) -> &mut LongFilter {
        self.id.get_or_insert_with(LongFilter::default)
    }

    pub fn title(&mut self) -> &mut StringFilter {
        self.title.get_or_insert_with(StringFilter::default)
    }

    pub fn description(&mut self) -> &mut StringFilter {
        self.description.get_or_insert_with(StringFilter::default)
    }

    pub fn job_id(&mut self) -> &mut LongFilter {
        self.job_id.get_or_insert_with(LongFilter::default)
    }

    /// Whether join-duplicated rows collapse. Defaults to true when unset.
    pub fn distinct(&self) -> bool {
        self.distinct.unwrap_or(true)
    }
}

impl fmt::Display for TaskCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskCriteria{{")?;
        let mut first = true;
        fmt_field(f, &mut first, "id", &self.id)?;
        fmt_field(f, &mut first, "title", &self.title)?;
        fmt_field(f, &mut first, "description", &self.description)?;
        fmt_field(f, &mut first, "jobId", &self.job_id)?;
        fmt_field(f, &mut first, "distinct", &self.distinct)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_criteria_renders_empty() {
        assert_eq!(TaskCriteria::new().to_string(), "TaskCriteria{}");
    }

    #[test]
    fn test_copy_duplicates_filters_independently() {
        let mut criteria = TaskCriteria::new();
        criteria.title().set_contains("review");

        let mut copy = criteria.clone();
        copy.title().set_contains("ship");

        assert_eq!(
            criteria.title.as_ref().unwrap().contains.as_deref(),
            Some("review")
        );
    }
}
