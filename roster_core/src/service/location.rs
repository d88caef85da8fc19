//! Query service for locations.

use log::debug;

use crate::criteria::LocationCriteria;
use crate::domain::Location;
use crate::query::{
    build_range_specification, build_reference_specification, build_string_specification, Page,
    PageRequest, Predicate, QueryError, Specification,
};
use crate::service::dto::LocationDto;
use crate::store::EntityStore;

/// Executes criteria queries for locations against a backing store.
pub struct LocationQueryService<S> {
    store: S,
}

impl<S: EntityStore<Location>> LocationQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return a page of location DTOs matching the criteria.
    pub fn find_by_criteria(
        &self,
        criteria: &LocationCriteria,
        page: &PageRequest,
    ) -> Result<Page<LocationDto>, QueryError> {
        debug!("find by criteria : {}, page: {:?}", criteria, page);
        let specification = create_specification(criteria);
        Ok(self
            .store
            .fetch_page(&specification, page)?
            .map(|location| LocationDto::from(&location)))
    }

    /// Return the number of locations matching the criteria.
    pub fn count_by_criteria(&self, criteria: &LocationCriteria) -> Result<u64, QueryError> {
        debug!("count by criteria : {}", criteria);
        let specification = create_specification(criteria);
        self.store.count(&specification)
    }
}

/// Convert the criteria into a specification all of whose filters must apply.
pub fn create_specification(criteria: &LocationCriteria) -> Specification {
    let mut predicate = Predicate::Always;
    if let Some(filter) = &criteria.id {
        predicate = predicate.and(build_range_specification(filter, "id"));
    }
    if let Some(filter) = &criteria.street_address {
        predicate = predicate.and(build_string_specification(filter, "streetAddress"));
    }
    if let Some(filter) = &criteria.postal_code {
        predicate = predicate.and(build_string_specification(filter, "postalCode"));
    }
    if let Some(filter) = &criteria.city {
        predicate = predicate.and(build_string_specification(filter, "city"));
    }
    if let Some(filter) = &criteria.state_province {
        predicate = predicate.and(build_string_specification(filter, "stateProvince"));
    }
    if let Some(filter) = &criteria.country_id {
        predicate = predicate.and(build_reference_specification(filter, "country"));
    }
    if let Some(filter) = &criteria.department_id {
        predicate = predicate.and(build_reference_specification(filter, "department"));
    }
    Specification {
        predicate,
        distinct: criteria.distinct(),
    }
}
