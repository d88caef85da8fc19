//! Query service for countries.

use log::debug;

use crate::criteria::CountryCriteria;
use crate::domain::Country;
use crate::query::{
    build_range_specification, build_reference_specification, build_string_specification, Page,
    PageRequest, Predicate, QueryError, Specification,
};
use crate::service::dto::CountryDto;
use crate::store::EntityStore;

/// Executes criteria queries for countries against a backing store.
pub struct CountryQueryService<S> {
    store: S,
}

impl<S: EntityStore<Country>> CountryQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return a page of country DTOs matching the criteria.
    pub fn find_by_criteria(
        &self,
        criteria: &CountryCriteria,
        page: &PageRequest,
    ) -> Result<Page<CountryDto>, QueryError> {
        debug!("find by criteria : {}, page: {:?}", criteria, page);
        let specification = create_specification(criteria);
        Ok(self
            .store
            .fetch_page(&specification, page)?
            .map(|country| CountryDto::from(&country)))
    }

    /// Return the number of countries matching the criteria.
    pub fn count_by_criteria(&self, criteria: &CountryCriteria) -> Result<u64, QueryError> {
        debug!("count by criteria : {}", criteria);
        let specification = create_specification(criteria);
        self.store.count(&specification)
    }
}

/// Convert the criteria into a specification all of whose filters must apply.
pub fn create_specification(criteria: &CountryCriteria) -> Specification {
    let mut predicate = Predicate::Always;
    if let Some(filter) = &criteria.id {
        predicate = predicate.and(build_range_specification(filter, "id"));
    }
    if let Some(filter) = &criteria.country_name {
        predicate = predicate.and(build_string_specification(filter, "countryName"));
    }
    if let Some(filter) = &criteria.region_id {
        predicate = predicate.and(build_reference_specification(filter, "region"));
    }
    if let Some(filter) = &criteria.location_id {
        predicate = predicate.and(build_reference_specification(filter, "location"));
    }
    Specification {
        predicate,
        distinct: criteria.distinct(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, Region};
    use crate::store::Dataset;

    fn atlas() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.regions.push(Region::new(1).with_region_name("Europe"));
        dataset
            .countries
            .push(Country::new(10).with_country_name("Norway").with_region(1));
        dataset
            .countries
            .push(Country::new(11).with_country_name("Chile"));
        dataset.locations.push(Location::new(100).with_country(11));
        dataset
    }

    #[test]
    fn test_filter_by_own_fk_relation() {
        let dataset = atlas();
        let service = CountryQueryService::new(&dataset);

        let mut criteria = CountryCriteria::new();
        criteria.region_id().set_equals(1);
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].country_name.as_deref(), Some("Norway"));
    }

    #[test]
    fn test_filter_by_reverse_location_relation() {
        let dataset = atlas();
        let service = CountryQueryService::new(&dataset);

        let mut criteria = CountryCriteria::new();
        criteria.location_id().set_specified(true);
        let page = service
            .find_by_criteria(&criteria, &PageRequest::default())
            .unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].country_name.as_deref(), Some("Chile"));
    }
}
