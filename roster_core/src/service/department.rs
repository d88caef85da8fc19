//! Query service for departments.

use log::debug;

use crate::criteria::DepartmentCriteria;
use crate::domain::Department;
use crate::query::{
    build_range_specification, build_reference_specification, build_string_specification, Page,
    PageRequest, Predicate, QueryError, Specification,
};
use crate::service::dto::DepartmentDto;
use crate::store::EntityStore;

/// Executes criteria queries for departments against a backing store.
pub struct DepartmentQueryService<S> {
    store: S,
}

impl<S: EntityStore<Department>> DepartmentQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return a page of department DTOs matching the criteria.
    pub fn find_by_criteria(
        &self,
        criteria: &DepartmentCriteria,
        page: &PageRequest,
    ) -> Result<Page<DepartmentDto>, QueryError> {
        debug!("find by criteria : {}, page: {:?}", criteria, page);
        let specification = create_specification(criteria);
        Ok(self
            .store
            .fetch_page(&specification, page)?
            .map(|department| DepartmentDto::from(&department)))
    }

    /// Return the number of departments matching the criteria.
    pub fn count_by_criteria(&self, criteria: &DepartmentCriteria) -> Result<u64, QueryError> {
        debug!("count by criteria : {}", criteria);
        let specification = create_specification(criteria);
        self.store.count(&specification)
    }
}

/// Convert the criteria into a specification all of whose filters must apply.
pub fn create_specification(criteria: &DepartmentCriteria) -> Specification {
    let mut predicate = Predicate::Always;
    if let Some(filter) = &criteria.id {
        predicate = predicate.and(build_range_specification(filter, "id"));
    }
    if let Some(filter) = &criteria.department_name {
        predicate = predicate.and(build_string_specification(filter, "departmentName"));
    }
    if let Some(filter) = &criteria.location_id {
        predicate = predicate.and(build_reference_specification(filter, "location"));
    }
    if let Some(filter) = &criteria.employee_id {
        predicate = predicate.and(build_reference_specification(filter, "employee"));
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
    use crate::domain::Employee;
    use crate::store::Dataset;

    #[test]
    fn test_filter_departments_by_employee_id() {
        let mut dataset = Dataset::new();
        dataset
            .departments
            .push(Department::new(1).with_department_name("Engineering"));
        dataset
            .departments
            .push(Department::new(2).with_department_name("Sales"));
        dataset.employees.push(Employee::new(7).with_department(1));
        let service = DepartmentQueryService::new(&dataset);

        let mut criteria = DepartmentCriteria::new();
        criteria.employee_id().set_equals(7);
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(
            page.content[0].department_name.as_deref(),
            Some("Engineering")
        );
    }
}
