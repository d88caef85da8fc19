//! Criteria aggregate for employee queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fmt_field;
use crate::filter::{InstantFilter, LongFilter, StringFilter};

/// All the filtering options an employee query can carry.
///
/// Every field is optional; an absent field places no constraint. The
/// relationship fields (`job_id`, `manager_id`, `department_id`,
/// `job_history_id`) filter on the related entity's identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeCriteria {
    pub id: Option<LongFilter>,
    pub first_name: Option<StringFilter>,
    pub last_name: Option<StringFilter>,
    pub email: Option<StringFilter>,
    pub phone_number: Option<StringFilter>,
    pub hire_date: Option<InstantFilter>,
    pub salary: Option<LongFilter>,
    pub commission_pct: Option<LongFilter>,
    pub job_id: Option<LongFilter>,
    pub manager_id: Option<LongFilter>,
    pub department_id: Option<LongFilter>,
    pub job_history_id: Option<LongFilter>,
    pub distinct: Option<bool>,
}

impl EmployeeCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self) -> &mut LongFilter {
        self.id.get_or_insert_with(LongFilter::default)
    }

    pub fn first_name(&mut self) -> &mut StringFilter {
        self.first_name.get_or_insert_with(StringFilter::default)
    }

    pub fn last_name(&mut self) -> &mut StringFilter {
        self.last_name.get_or_insert_with(StringFilter::default)
    }

    pub fn email(&mut self) -> &mut StringFilter {
        self.email.get_or_insert_with(StringFilter::default)
    }

    pub fn phone_number(&mut self) -> &mut StringFilter {
        self.phone_number.get_or_insert_with(StringFilter::default)
    }

    pub fn hire_date(&mut self) -> &mut InstantFilter {
        self.hire_date.get_or_insert_with(InstantFilter::default)
    }

    pub fn salary(&mut self) -> &mut LongFilter {
        self.salary.get_or_insert_with(LongFilter::default)
    }

    pub fn commission_pct(&mut self) -> &mut LongFilter {
        self.commission_pct.get_or_insert_with(LongFilter::default)
    }

    pub fn job_id(&mut self) -> &mut LongFilter {
        self.job_id.get_or_insert_with(LongFilter::default)
    }

    pub fn manager_id(&mut self) -> &mut LongFilter {
        self.manager_id.get_or_insert_with(LongFilter::default)
    }

    pub fn department_id(&mut self) -> &mut LongFilter {
        self.department_id.get_or_insert_with(LongFilter::default)
    }

    pub fn job_history_id(&mut self) -> &mut LongFilter {
        self.job_history_id.get_or_insert_with(LongFilter::default)
    }

    /// Whether join-duplicated rows collapse. Defaults to true when unset;
    /// reading never mutates the stored value.
    pub fn distinct(&self) -> bool {
        self.distinct.unwrap_or(true)
    }
}

impl fmt::Display for EmployeeCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmployeeCriteria{{")?;
        let mut first = true;
        fmt_field(f, &mut first, "id", &self.id)?;
        fmt_field(f, &mut first, "firstName", &self.first_name)?;
        fmt_field(f, &mut first, "lastName", &self.last_name)?;
        fmt_field(f, &mut first, "email", &self.email)?;
        fmt_field(f, &mut first, "phoneNumber", &self.phone_number)?;
        fmt_field(f, &mut first, "hireDate", &self.hire_date)?;
        fmt_field(f, &mut first, "salary", &self.salary)?;
        fmt_field(f, &mut first, "commissionPct", &self.commission_pct)?;
        fmt_field(f, &mut first, "jobId", &self.job_id)?;
        fmt_field(f, &mut first, "managerId", &self.manager_id)?;
        fmt_field(f, &mut first, "departmentId", &self.department_id)?;
        fmt_field(f, &mut first, "jobHistoryId", &self.job_history_id)?;
        fmt_field(f, &mut first, "distinct", &self.distinct)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash_of(criteria: &EmployeeCriteria) -> u64 {
        let mut hasher = DefaultHasher::new();
        criteria.hash(&mut hasher);
        hasher.finish()
    }

    fn touch_all(criteria: &mut EmployeeCriteria) {
        criteria.id();
        criteria.first_name();
        criteria.last_name();
        criteria.email();
        criteria.phone_number();
        criteria.hire_date();
        criteria.salary();
        criteria.commission_pct();
        criteria.job_id();
        criteria.manager_id();
        criteria.department_id();
        criteria.job_history_id();
    }

    #[test]
    fn test_new_criteria_has_every_filter_unset() {
        let criteria = EmployeeCriteria::new();
        assert_eq!(criteria.id, None);
        assert_eq!(criteria.first_name, None);
        assert_eq!(criteria.hire_date, None);
        assert_eq!(criteria.job_history_id, None);
        assert_eq!(criteria.distinct, None);
        assert_eq!(criteria.to_string(), "EmployeeCriteria{}");
    }

    #[test]
    fn test_accessors_materialize_filters() {
        let mut criteria = EmployeeCriteria::new();
        touch_all(&mut criteria);

        assert!(criteria.id.is_some());
        assert!(criteria.first_name.is_some());
        assert!(criteria.last_name.is_some());
        assert!(criteria.email.is_some());
        assert!(criteria.phone_number.is_some());
        assert!(criteria.hire_date.is_some());
        assert!(criteria.salary.is_some());
        assert!(criteria.commission_pct.is_some());
        assert!(criteria.job_id.is_some());
        assert!(criteria.manager_id.is_some());
        assert!(criteria.department_id.is_some());
        assert!(criteria.job_history_id.is_some());
        assert_ne!(criteria.to_string(), "EmployeeCriteria{}");
    }

    #[test]
    fn test_distinct_reads_default_without_mutating() {
        let criteria = EmployeeCriteria::new();
        assert!(criteria.distinct());
        assert_eq!(criteria.distinct, None);

        let mut criteria = EmployeeCriteria::new();
        criteria.distinct = Some(false);
        assert!(!criteria.distinct());
    }

    #[test]
    fn test_copy_of_empty_criteria_is_equal() {
        let criteria = EmployeeCriteria::new();
        let copy = criteria.clone();

        assert_eq!(copy, criteria);
        assert_eq!(copy.to_string(), criteria.to_string());
        assert_eq!(hash_of(&copy), hash_of(&criteria));
    }

    #[test]
    fn test_copy_duplicates_every_filter_independently() {
        let mut criteria = EmployeeCriteria::new();
        touch_all(&mut criteria);
        criteria.salary().set_greater_than_or_equal(5);

        let mut copy = criteria.clone();
        assert_eq!(copy, criteria);
        assert_eq!(hash_of(&copy), hash_of(&criteria));

        // Mutating the copy must never reach the original, and vice versa.
        copy.salary().set_less_than(10);
        assert_eq!(criteria.salary.as_ref().unwrap().less_than, None);
        criteria.first_name().set_contains("A");
        assert_eq!(copy.first_name.as_ref().unwrap().contains, None);
        assert_ne!(copy, criteria);
    }

    #[test]
    fn test_display_renders_present_fields_in_declaration_order() {
        let mut criteria = EmployeeCriteria::new();
        criteria.salary().set_greater_than_or_equal(5);
        criteria.first_name().set_contains("Gr");
        criteria.distinct = Some(true);

        assert_eq!(
            criteria.to_string(),
            "EmployeeCriteria{firstName=[contains=Gr], salary=[greaterThanOrEqual=5], distinct=true}"
        );
    }

    #[test]
    fn test_decodes_from_camel_case_json() {
        let criteria: EmployeeCriteria = serde_json::from_str(
            r#"{"firstName": {"contains": "oo"}, "salary": {"greaterThanOrEqual": 5}, "distinct": false}"#,
        )
        .unwrap();

        assert_eq!(
            criteria.first_name.as_ref().unwrap().contains.as_deref(),
            Some("oo")
        );
        assert_eq!(
            criteria.salary.as_ref().unwrap().greater_than_or_equal,
            Some(5)
        );
        assert_eq!(criteria.distinct, Some(false));
    }
}
