//! Query service for jobs.

use log::debug;

use crate::criteria::JobCriteria;
use crate::domain::Job;
use crate::query::{
    build_range_specification, build_reference_specification, build_string_specification, Page,
    PageRequest, Predicate, QueryError, Specification,
};
use crate::service::dto::JobDto;
use crate::store::EntityStore;

/// Executes criteria queries for jobs against a backing store.
pub struct JobQueryService<S> {
    store: S,
}

impl<S: EntityStore<Job>> JobQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return a page of job DTOs matching the criteria.
    pub fn find_by_criteria(
        &self,
        criteria: &JobCriteria,
        page: &PageRequest,
    ) -> Result<Page<JobDto>, QueryError> {
        debug!("find by criteria : {}, page: {:?}", criteria, page);
        let specification = create_specification(criteria);
        Ok(self
            .store
            .fetch_page(&specification, page)?
            .map(|job| JobDto::from(&job)))
    }

    /// Return the number of jobs matching the criteria.
    pub fn count_by_criteria(&self, criteria: &JobCriteria) -> Result<u64, QueryError> {
        debug!("count by criteria : {}", criteria);
        let specification = create_specification(criteria);
        self.store.count(&specification)
    }
}

/// Convert the criteria into a specification all of whose filters must apply.
pub fn create_specification(criteria: &JobCriteria) -> Specification {
    let mut predicate = Predicate::Always;
    if let Some(filter) = &criteria.id {
        predicate = predicate.and(build_range_specification(filter, "id"));
    }
    if let Some(filter) = &criteria.job_title {
        predicate = predicate.and(build_string_specification(filter, "jobTitle"));
    }
    if let Some(filter) = &criteria.min_salary {
        predicate = predicate.and(build_range_specification(filter, "minSalary"));
    }
    if let Some(filter) = &criteria.max_salary {
        predicate = predicate.and(build_range_specification(filter, "maxSalary"));
    }
    if let Some(filter) = &criteria.task_id {
        predicate = predicate.and(build_reference_specification(filter, "task"));
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
