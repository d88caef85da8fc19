//! In-memory persistence store.
//!
//! [`Dataset`] owns the entity tables and is the component that translates
//! predicates: it walks the predicate tree against each row, resolving field
//! conditions through the entity's static field table and relationship
//! conditions through LEFT-join id lookups.
//!
//! A relationship condition matching k joined rows gives the parent row
//! multiplicity k, and multiplicities multiply across relationship
//! conditions (each condition is its own join). A specification with
//! `distinct` collapses multiplicity to one;
//! without it, `fetch_page` and `count` both see the duplicated rows.

mod eval;
mod row;

pub use row::Row;

use log::debug;

use crate::domain::{
    Country, Department, Employee, FieldValue, Job, JobHistory, Location, Region, Task,
};
use crate::query::{Page, PageRequest, Predicate, QueryError, Specification};

/// The store contract query services depend on.
pub trait EntityStore<E> {
    /// Fetch one id-ordered page of rows matching the specification.
    fn fetch_page(&self, spec: &Specification, page: &PageRequest) -> Result<Page<E>, QueryError>;

    /// Count the rows matching the specification, without paging.
    fn count(&self, spec: &Specification) -> Result<u64, QueryError>;
}

impl<E, S: EntityStore<E>> EntityStore<E> for &S {
    fn fetch_page(&self, spec: &Specification, page: &PageRequest) -> Result<Page<E>, QueryError> {
        (**self).fetch_page(spec, page)
    }

    fn count(&self, spec: &Specification) -> Result<u64, QueryError> {
        (**self).count(spec)
    }
}

/// In-memory tables for the whole roster domain.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub regions: Vec<Region>,
    pub countries: Vec<Country>,
    pub locations: Vec<Location>,
    pub departments: Vec<Department>,
    pub tasks: Vec<Task>,
    pub employees: Vec<Employee>,
    pub jobs: Vec<Job>,
    pub job_histories: Vec<JobHistory>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many result rows one entity row contributes under the predicate.
    ///
    /// Zero means the row is filtered out. Values above one only arise from
    /// to-many relationship conditions matching several joined rows.
    fn multiplicity<R: Row>(&self, row: &R, predicate: &Predicate) -> Result<usize, QueryError> {
        match predicate {
            Predicate::Always => Ok(1),
            Predicate::And(parts) => {
                let mut result = 1;
                for part in parts {
                    result *= self.multiplicity(row, part)?;
                    if result == 0 {
                        break;
                    }
                }
                Ok(result)
            }
            Predicate::Field { field, condition } => {
                let value = row.field(field)?;
                Ok(eval::eval(field, value.as_ref(), condition)? as usize)
            }
            Predicate::Joined {
                relation,
                condition,
            } => {
                let ids = row.joined_ids(relation, self)?;
                if ids.is_empty() {
                    // LEFT join: an absent relation leaves one null joined row.
                    Ok(eval::eval(relation, None, condition)? as usize)
                } else {
                    let mut matched = 0;
                    for id in ids {
                        if eval::eval(relation, Some(&FieldValue::Long(id)), condition)? {
                            matched += 1;
                        }
                    }
                    Ok(matched)
                }
            }
        }
    }

    fn select<R: Row + Clone>(
        &self,
        rows: &[R],
        spec: &Specification,
    ) -> Result<Vec<R>, QueryError> {
        let mut selected = Vec::new();
        for row in rows {
            let mut count = self.multiplicity(row, &spec.predicate)?;
            if spec.distinct {
                count = count.min(1);
            }
            for _ in 0..count {
                selected.push(row.clone());
            }
        }
        selected.sort_by_key(|row| row.id());
        Ok(selected)
    }

    fn fetch<R: Row + Clone>(
        &self,
        rows: &[R],
        spec: &Specification,
        page: &PageRequest,
    ) -> Result<Page<R>, QueryError> {
        let selected = self.select(rows, spec)?;
        let total = selected.len() as u64;
        debug!(
            "{}: fetching page {} of {} matching rows",
            R::ENTITY,
            page.page,
            total
        );
        let content = selected
            .into_iter()
            .skip(page.page.saturating_mul(page.size))
            .take(page.size)
            .collect();
        Ok(Page {
            content,
            page: page.page,
            size: page.size,
            total,
        })
    }

    fn count_rows<R: Row + Clone>(
        &self,
        rows: &[R],
        spec: &Specification,
    ) -> Result<u64, QueryError> {
        Ok(self.select(rows, spec)?.len() as u64)
    }
}

impl EntityStore<Region> for Dataset {
    fn fetch_page(
        &self,
        spec: &Specification,
        page: &PageRequest,
    ) -> Result<Page<Region>, QueryError> {
        self.fetch(&self.regions, spec, page)
    }

    fn count(&self, spec: &Specification) -> Result<u64, QueryError> {
        self.count_rows(&self.regions, spec)
    }
}

impl EntityStore<Country> for Dataset {
    fn fetch_page(
        &self,
        spec: &Specification,
        page: &PageRequest,
    ) -> Result<Page<Country>, QueryError> {
        self.fetch(&self.countries, spec, page)
    }

    fn count(&self, spec: &Specification) -> Result<u64, QueryError> {
        self.count_rows(&self.countries, spec)
    }
}

impl EntityStore<Location> for Dataset {
    fn fetch_page(
        &self,
        spec: &Specification,
        page: &PageRequest,
    ) -> Result<Page<Location>, QueryError> {
        self.fetch(&self.locations, spec, page)
    }

    fn count(&self, spec: &Specification) -> Result<u64, QueryError> {
        self.count_rows(&self.locations, spec)
    }
}

impl EntityStore<Department> for Dataset {
    fn fetch_page(
        &self,
        spec: &Specification,
        page: &PageRequest,
    ) -> Result<Page<Department>, QueryError> {
        self.fetch(&self.departments, spec, page)
    }

    fn count(&self, spec: &Specification) -> Result<u64, QueryError> {
        self.count_rows(&self.departments, spec)
    }
}

impl EntityStore<Task> for Dataset {
    fn fetch_page(
        &self,
        spec: &Specification,
        page: &PageRequest,
    ) -> Result<Page<Task>, QueryError> {
        self.fetch(&self.tasks, spec, page)
    }

    fn count(&self, spec: &Specification) -> Result<u64, QueryError> {
        self.count_rows(&self.tasks, spec)
    }
}

impl EntityStore<Employee> for Dataset {
    fn fetch_page(
        &self,
        spec: &Specification,
        page: &PageRequest,
    ) -> Result<Page<Employee>, QueryError> {
        self.fetch(&self.employees, spec, page)
    }

    fn count(&self, spec: &Specification) -> Result<u64, QueryError> {
        self.count_rows(&self.employees, spec)
    }
}

impl EntityStore<Job> for Dataset {
    fn fetch_page(
        &self,
        spec: &Specification,
        page: &PageRequest,
    ) -> Result<Page<Job>, QueryError> {
        self.fetch(&self.jobs, spec, page)
    }

    fn count(&self, spec: &Specification) -> Result<u64, QueryError> {
        self.count_rows(&self.jobs, spec)
    }
}

impl EntityStore<JobHistory> for Dataset {
    fn fetch_page(
        &self,
        spec: &Specification,
        page: &PageRequest,
    ) -> Result<Page<JobHistory>, QueryError> {
        self.fetch(&self.job_histories, spec, page)
    }

    fn count(&self, spec: &Specification) -> Result<u64, QueryError> {
        self.count_rows(&self.job_histories, spec)
    }
}
