//! Query service for tasks.

use log::debug;

use crate::criteria::TaskCriteria;
use crate::domain::Task;
use crate::query::{
    build_range_specification, build_reference_specification, build_string_specification, Page,
    PageRequest, Predicate, QueryError, Specification,
};
use crate::service::dto::TaskDto;
use crate::store::EntityStore;

/// Executes criteria queries for tasks against a backing store.
pub struct TaskQueryService<S> {
    store: S,
}

impl<S: EntityStore<Task>> TaskQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return a page of task DTOs matching the criteria.
    pub fn find_by_criteria(
        &self,
        criteria: &TaskCriteria,
        page: &PageRequest,
    ) -> Result<Page<TaskDto>, QueryError> {
        debug!("find by criteria : {}, page: {:?}", criteria, page);
        let specification = create_specification(criteria);
        Ok(self
            .store
            .fetch_page(&specification, page)?
            .map(|task| TaskDto::from(&task)))
    }

    /// Return the number of tasks matching the criteria.
    pub fn count_by_criteria(&self, criteria: &TaskCriteria) -> Result<u64, QueryError> {
        debug!("count by criteria : {}", criteria);
        let specification = create_specification(criteria);
        self.store.count(&specification)
    }
}

/// Convert the criteria into a specification all of whose filters must apply.
pub fn create_specification(criteria: &TaskCriteria) -> Specification {
    let mut predicate = Predicate::Always;
    if let Some(filter) = &criteria.id {
        predicate = predicate.and(build_range_specification(filter, "id"));
    }
    if let Some(filter) = &criteria.title {
        predicate = predicate.and(build_string_specification(filter, "title"));
    }
    if let Some(filter) = &criteria.description {
        predicate = predicate.and(build_string_specification(filter, "description"));
    }
    if let Some(filter) = &criteria.job_id {
        predicate = predicate.and(build_reference_specification(filter, "job"));
    }
    Specification {
        predicate,
        distinct: criteria.distinct(),
    }
}
