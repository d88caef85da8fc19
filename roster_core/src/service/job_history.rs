//! Query service for job histories.

use log::debug;

use crate::criteria::JobHistoryCriteria;
use crate::domain::JobHistory;
use crate::query::{
    build_range_specification, build_reference_specification, build_specification, Page,
    PageRequest, Predicate, QueryError, Specification,
};
use crate::service::dto::JobHistoryDto;
use crate::store::EntityStore;

/// Executes criteria queries for job histories against a backing store.
pub struct JobHistoryQueryService<S> {
    store: S,
}

impl<S: EntityStore<JobHistory>> JobHistoryQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return a page of job history DTOs matching the criteria.
    pub fn find_by_criteria(
        &self,
        criteria: &JobHistoryCriteria,
        page: &PageRequest,
    ) -> Result<Page<JobHistoryDto>, QueryError> {
        debug!("find by criteria : {}, page: {:?}", criteria, page);
        let specification = create_specification(criteria);
        Ok(self
            .store
            .fetch_page(&specification, page)?
            .map(|history| JobHistoryDto::from(&history)))
    }

    /// Return the number of job histories matching the criteria.
    pub fn count_by_criteria(&self, criteria: &JobHistoryCriteria) -> Result<u64, QueryError> {
        debug!("count by criteria : {}", criteria);
        let specification = create_specification(criteria);
        self.store.count(&specification)
    }
}

/// Convert the criteria into a specification all of whose filters must apply.
pub fn create_specification(criteria: &JobHistoryCriteria) -> Specification {
    let mut predicate = Predicate::Always;
    if let Some(filter) = &criteria.id {
        predicate = predicate.and(build_range_specification(filter, "id"));
    }
    if let Some(filter) = &criteria.start_date {
        predicate = predicate.and(build_range_specification(filter, "startDate"));
    }
    if let Some(filter) = &criteria.end_date {
        predicate = predicate.and(build_range_specification(filter, "endDate"));
    }
    if let Some(filter) = &criteria.language {
        predicate = predicate.and(build_specification(filter, "language"));
    }
    if let Some(filter) = &criteria.job_id {
        predicate = predicate.and(build_reference_specification(filter, "job"));
    }
    if let Some(filter) = &criteria.department_id {
        predicate = predicate.and(build_reference_specification(filter, "department"));
    }
    if let Some(filter) = &criteria.employee_id {
        predicate = predicate.and(build_reference_specification(filter, "employee"));
    }
    Specification {
        predicate,
        distinct: criteria.distinct(),
    }
}
