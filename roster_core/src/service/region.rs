//! Query service for regions.

use log::debug;

use crate::criteria::RegionCriteria;
use crate::domain::Region;
use crate::query::{
    build_range_specification, build_reference_specification, build_string_specification, Page,
    PageRequest, Predicate, QueryError, Specification,
};
use crate::service::dto::RegionDto;
use crate::store::EntityStore;

/// Executes criteria queries for regions against a backing store.
pub struct RegionQueryService<S> {
    store: S,
}

impl<S: EntityStore<Region>> RegionQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return a page of region DTOs matching the criteria.
    pub fn find_by_criteria(
        &self,
        criteria: &RegionCriteria,
        page: &PageRequest,
    ) -> Result<Page<RegionDto>, QueryError> {
        debug!("find by criteria : {}, page: {:?}", criteria, page);
        let specification = create_specification(criteria);
        Ok(self
            .store
            .fetch_page(&specification, page)?
            .map(|region| RegionDto::from(&region)))
    }

    /// Return the number of regions matching the criteria.
    pub fn count_by_criteria(&self, criteria: &RegionCriteria) -> Result<u64, QueryError> {
        debug!("count by criteria : {}", criteria);
        let specification = create_specification(criteria);
        self.store.count(&specification)
    }
}

/// Convert the criteria into a specification all of whose filters must apply.
pub fn create_specification(criteria: &RegionCriteria) -> Specification {
    let mut predicate = Predicate::Always;
    if let Some(filter) = &criteria.id {
        predicate = predicate.and(build_range_specification(filter, "id"));
    }
    if let Some(filter) = &criteria.region_name {
        predicate = predicate.and(build_string_specification(filter, "regionName"));
    }
    if let Some(filter) = &criteria.country_id {
        predicate = predicate.and(build_reference_specification(filter, "country"));
    }
    Specification {
        predicate,
        distinct: criteria.distinct(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Country;
    use crate::store::Dataset;

    #[test]
    fn test_filter_regions_by_their_countries() {
        let mut dataset = Dataset::new();
        dataset.regions.push(Region::new(1).with_region_name("Europe"));
        dataset.regions.push(Region::new(2).with_region_name("Asia"));
        dataset.countries.push(Country::new(10).with_region(1));
        let service = RegionQueryService::new(&dataset);

        let mut criteria = RegionCriteria::new();
        criteria.country_id().set_equals(10);
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].region_name.as_deref(), Some("Europe"));
        assert_eq!(service.count_by_criteria(&criteria).unwrap(), 1);
    }
}
