//! Query service for employees.

use log::debug;

use crate::criteria::EmployeeCriteria;
use crate::domain::Employee;
use crate::query::{
    build_range_specification, build_reference_specification, build_string_specification, Page,
    PageRequest, Predicate, QueryError, Specification,
};
use crate::service::dto::EmployeeDto;
use crate::store::EntityStore;

/// Executes criteria queries for employees against a backing store.
///
/// The main input is an [`EmployeeCriteria`], converted into a
/// [`Specification`] in a way that all the filters must apply.
pub struct EmployeeQueryService<S> {
    store: S,
}

impl<S: EntityStore<Employee>> EmployeeQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return a page of employee DTOs matching the criteria.
    pub fn find_by_criteria(
        &self,
        criteria: &EmployeeCriteria,
        page: &PageRequest,
    ) -> Result<Page<EmployeeDto>, QueryError> {
        debug!("find by criteria : {}, page: {:?}", criteria, page);
        let specification = create_specification(criteria);
        Ok(self
            .store
            .fetch_page(&specification, page)?
            .map(|employee| EmployeeDto::from(&employee)))
    }

    /// Return the number of employees matching the criteria.
    pub fn count_by_criteria(&self, criteria: &EmployeeCriteria) -> Result<u64, QueryError> {
        debug!("count by criteria : {}", criteria);
        let specification = create_specification(criteria);
        self.store.count(&specification)
    }
}

/// Convert the criteria into a specification all of whose filters must apply.
pub fn create_specification(criteria: &EmployeeCriteria) -> Specification {
    let mut predicate = Predicate::Always;
    if let Some(filter) = &criteria.id {
        predicate = predicate.and(build_range_specification(filter, "id"));
    }
    if let Some(filter) = &criteria.first_name {
        predicate = predicate.and(build_string_specification(filter, "firstName"));
    }
    if let Some(filter) = &criteria.last_name {
        predicate = predicate.and(build_string_specification(filter, "lastName"));
    }
    if let Some(filter) = &criteria.email {
        predicate = predicate.and(build_string_specification(filter, "email"));
    }
    if let Some(filter) = &criteria.phone_number {
        predicate = predicate.and(build_string_specification(filter, "phoneNumber"));
    }
    if let Some(filter) = &criteria.hire_date {
        predicate = predicate.and(build_range_specification(filter, "hireDate"));
    }
    if let Some(filter) = &criteria.salary {
        predicate = predicate.and(build_range_specification(filter, "salary"));
    }
    if let Some(filter) = &criteria.commission_pct {
        predicate = predicate.and(build_range_specification(filter, "commissionPct"));
    }
    if let Some(filter) = &criteria.job_id {
        predicate = predicate.and(build_reference_specification(filter, "job"));
    }
    if let Some(filter) = &criteria.manager_id {
        predicate = predicate.and(build_reference_specification(filter, "manager"));
    }
    if let Some(filter) = &criteria.department_id {
        predicate = predicate.and(build_reference_specification(filter, "department"));
    }
    if let Some(filter) = &criteria.job_history_id {
        predicate = predicate.and(build_reference_specification(filter, "jobHistory"));
    }
    Specification {
        predicate,
        distinct: criteria.distinct(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Job;
    use crate::store::Dataset;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Alice and Bob, plus one job held by Alice; Bob has no manager.
    fn workforce() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.employees.push(
            Employee::new(1)
                .with_first_name("Alice")
                .with_last_name("Moore")
                .with_email("alice@example.org")
                .with_salary(7)
                .with_manager(2),
        );
        dataset.employees.push(
            Employee::new(2)
                .with_first_name("Bob")
                .with_last_name("Barnes")
                .with_salary(12),
        );
        dataset.jobs.push(Job::new(40).with_employee(1));
        dataset
    }

    fn names(page: &Page<EmployeeDto>) -> Vec<String> {
        page.content
            .iter()
            .filter_map(|dto| dto.first_name.clone())
            .collect()
    }

    #[test]
    fn test_empty_criteria_returns_all_rows() {
        init_logging();
        let dataset = workforce();
        let service = EmployeeQueryService::new(&dataset);

        let page = service
            .find_by_criteria(&EmployeeCriteria::new(), &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Alice", "Bob"]);
        assert_eq!(service.count_by_criteria(&EmployeeCriteria::new()).unwrap(), 2);
    }

    #[test]
    fn test_equals_selects_exactly_the_matching_row() {
        let dataset = workforce();
        let service = EmployeeQueryService::new(&dataset);

        let mut criteria = EmployeeCriteria::new();
        criteria.first_name().set_equals("Alice");
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Alice"]);
        assert_eq!(service.count_by_criteria(&criteria).unwrap(), 1);

        let mut criteria = EmployeeCriteria::new();
        criteria.first_name().set_equals("Bob");
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Bob"]);
    }

    #[test]
    fn test_half_open_salary_range() {
        let dataset = workforce();
        let service = EmployeeQueryService::new(&dataset);

        let mut criteria = EmployeeCriteria::new();
        criteria.salary().set_greater_than_or_equal(5).set_less_than(10);

        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Alice"]);

        // The bounds themselves: 7 is in [5, 10), 12 is not; 5 itself would be.
        let mut criteria = EmployeeCriteria::new();
        criteria.salary().set_greater_than_or_equal(12).set_less_than(13);
        assert_eq!(service.count_by_criteria(&criteria).unwrap(), 1);
    }

    #[test]
    fn test_contains_and_does_not_contain() {
        let dataset = workforce();
        let service = EmployeeQueryService::new(&dataset);

        let mut criteria = EmployeeCriteria::new();
        criteria.last_name().set_contains("oo");
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Alice"]);

        let mut criteria = EmployeeCriteria::new();
        criteria.last_name().set_does_not_contain("oo");
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Bob"]);
    }

    #[test]
    fn test_does_not_contain_skips_null_fields() {
        let mut dataset = workforce();
        dataset.employees.push(Employee::new(3).with_first_name("Nell"));
        let service = EmployeeQueryService::new(&dataset);

        // Employee 3 has no last name: neither contains nor doesNotContain
        // matches a null field.
        let mut criteria = EmployeeCriteria::new();
        criteria.last_name().set_does_not_contain("zz");
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_in_and_not_in_sets() {
        let dataset = workforce();
        let service = EmployeeQueryService::new(&dataset);

        let mut criteria = EmployeeCriteria::new();
        criteria
            .first_name()
            .set_in(vec!["Alice".to_string(), "Eve".to_string()]);
        assert_eq!(service.count_by_criteria(&criteria).unwrap(), 1);

        let mut criteria = EmployeeCriteria::new();
        criteria
            .first_name()
            .set_not_in(vec!["Alice".to_string(), "Eve".to_string()]);
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Bob"]);

        // Empty in-set matches nothing.
        let mut criteria = EmployeeCriteria::new();
        criteria.first_name().set_in(Vec::new());
        assert_eq!(service.count_by_criteria(&criteria).unwrap(), 0);
    }

    #[test]
    fn test_relation_specified_filters_on_presence() {
        let dataset = workforce();
        let service = EmployeeQueryService::new(&dataset);

        // Alice reports to Bob; Bob reports to nobody.
        let mut criteria = EmployeeCriteria::new();
        criteria.manager_id().set_specified(true);
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Alice"]);

        let mut criteria = EmployeeCriteria::new();
        criteria.manager_id().set_specified(false);
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Bob"]);
    }

    #[test]
    fn test_reverse_relation_filter_by_job_id() {
        let dataset = workforce();
        let service = EmployeeQueryService::new(&dataset);

        let mut criteria = EmployeeCriteria::new();
        criteria.job_id().set_equals(40);
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(names(&page), vec!["Alice"]);
    }

    #[test]
    fn test_find_does_not_mutate_the_criteria() {
        let dataset = workforce();
        let service = EmployeeQueryService::new(&dataset);

        let criteria = EmployeeCriteria::new();
        let before = criteria.clone();
        service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(criteria, before);
        assert_eq!(criteria.distinct, None);
    }

    #[test]
    fn test_kind_errors_pass_through_unchanged() {
        let dataset = workforce();
        let service = EmployeeQueryService::new(&dataset);

        // A substring operator on a numeric field is rejected by the store
        // and surfaces unchanged.
        let mut criteria = EmployeeCriteria::new();
        criteria.salary().set_greater_than(5);
        assert!(service.count_by_criteria(&criteria).is_ok());

        let spec = Specification {
            predicate: Predicate::field(
                "salary",
                crate::query::Condition::Contains("7".to_string()),
            ),
            distinct: true,
        };
        let direct: Result<u64, QueryError> = EntityStore::<Employee>::count(&dataset, &spec);
        assert!(matches!(
            direct,
            Err(QueryError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn test_paging_applies_after_filtering() {
        let mut dataset = Dataset::new();
        for id in 1..=5 {
            dataset
                .employees
                .push(Employee::new(id).with_salary(id * 10));
        }
        let service = EmployeeQueryService::new(&dataset);

        let mut criteria = EmployeeCriteria::new();
        criteria.salary().set_greater_than(10);

        let page = service
            .find_by_criteria(&criteria, &PageRequest::of(1, 2))
            .unwrap();
        assert_eq!(page.total, 4);
        assert_eq!(
            page.content.iter().map(|dto| dto.id).collect::<Vec<_>>(),
            vec![4, 5]
        );
    }
}
