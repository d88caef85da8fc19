//! Per-entity field and relationship tables.
//!
//! Each entity maps its declared field names to typed accessors and its
//! relationship names to the ids of the rows they reach, so one generic
//! evaluation routine serves every entity. Relationship lookups need the
//! whole dataset: reverse directions resolve against the related table.

use super::Dataset;
use crate::domain::{
    Country, Department, Employee, FieldValue, Job, JobHistory, Location, Region, Task,
};
use crate::query::QueryError;

/// A storable entity row the dataset can evaluate predicates against.
pub trait Row {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    fn id(&self) -> i64;

    /// Look up one of the entity's own fields by declared name.
    fn field(&self, name: &str) -> Result<Option<FieldValue>, QueryError>;

    /// Ids of the rows reached through a named relationship. An empty result
    /// means the relation is absent (the LEFT-join null row).
    fn joined_ids(&self, relation: &str, dataset: &Dataset) -> Result<Vec<i64>, QueryError>;
}

impl Row for Region {
    const ENTITY: &'static str = "Region";

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>, QueryError> {
        match name {
            "id" => Ok(Some(FieldValue::Long(self.id))),
            "regionName" => Ok(self.region_name.clone().map(FieldValue::Text)),
            _ => Err(QueryError::unknown_field(Self::ENTITY, name)),
        }
    }

    fn joined_ids(&self, relation: &str, dataset: &Dataset) -> Result<Vec<i64>, QueryError> {
        match relation {
            "country" => Ok(dataset
                .countries
                .iter()
                .filter(|country| country.region_id == Some(self.id))
                .map(|country| country.id)
                .collect()),
            _ => Err(QueryError::unknown_relation(Self::ENTITY, relation)),
        }
    }
}

impl Row for Country {
    const ENTITY: &'static str = "Country";

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>, QueryError> {
        match name {
            "id" => Ok(Some(FieldValue::Long(self.id))),
            "countryName" => Ok(self.country_name.clone().map(FieldValue::Text)),
            _ => Err(QueryError::unknown_field(Self::ENTITY, name)),
        }
    }

    fn joined_ids(&self, relation: &str, dataset: &Dataset) -> Result<Vec<i64>, QueryError> {
        match relation {
            "region" => Ok(self.region_id.into_iter().collect()),
            "location" => Ok(dataset
                .locations
                .iter()
                .filter(|location| location.country_id == Some(self.id))
                .map(|location| location.id)
                .collect()),
            _ => Err(QueryError::unknown_relation(Self::ENTITY, relation)),
        }
    }
}

impl Row for Location {
    const ENTITY: &'static str = "Location";

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>, QueryError> {
        match name {
            "id" => Ok(Some(FieldValue::Long(self.id))),
            "streetAddress" => Ok(self.street_address.clone().map(FieldValue::Text)),
            "postalCode" => Ok(self.postal_code.clone().map(FieldValue::Text)),
            "city" => Ok(self.city.clone().map(FieldValue::Text)),
            "stateProvince" => Ok(self.state_province.clone().map(FieldValue::Text)),
            _ => Err(QueryError::unknown_field(Self::ENTITY, name)),
        }
    }

    fn joined_ids(&self, relation: &str, dataset: &Dataset) -> Result<Vec<i64>, QueryError> {
        match relation {
            "country" => Ok(self.country_id.into_iter().collect()),
            "department" => Ok(dataset
                .departments
                .iter()
                .filter(|department| department.location_id == Some(self.id))
                .map(|department| department.id)
                .collect()),
            _ => Err(QueryError::unknown_relation(Self::ENTITY, relation)),
        }
    }
}

impl Row for Department {
    const ENTITY: &'static str = "Department";

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>, QueryError> {
        match name {
            "id" => Ok(Some(FieldValue::Long(self.id))),
            "departmentName" => Ok(self.department_name.clone().map(FieldValue::Text)),
            _ => Err(QueryError::unknown_field(Self::ENTITY, name)),
        }
    }

    fn joined_ids(&self, relation: &str, dataset: &Dataset) -> Result<Vec<i64>, QueryError> {
        match relation {
            "location" => Ok(self.location_id.into_iter().collect()),
            "employee" => Ok(dataset
                .employees
                .iter()
                .filter(|employee| employee.department_id == Some(self.id))
                .map(|employee| employee.id)
                .collect()),
            "jobHistory" => Ok(dataset
                .job_histories
                .iter()
                .filter(|history| history.department_id == Some(self.id))
                .map(|history| history.id)
                .collect()),
            _ => Err(QueryError::unknown_relation(Self::ENTITY, relation)),
        }
    }
}

impl Row for Task {
    const ENTITY: &'static str = "Task";

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>, QueryError> {
        match name {
            "id" => Ok(Some(FieldValue::Long(self.id))),
            "title" => Ok(self.title.clone().map(FieldValue::Text)),
            "description" => Ok(self.description.clone().map(FieldValue::Text)),
            _ => Err(QueryError::unknown_field(Self::ENTITY, name)),
        }
    }

    fn joined_ids(&self, relation: &str, dataset: &Dataset) -> Result<Vec<i64>, QueryError> {
        match relation {
            "job" => Ok(dataset
                .jobs
                .iter()
                .filter(|job| job.task_ids.contains(&self.id))
                .map(|job| job.id)
                .collect()),
            _ => Err(QueryError::unknown_relation(Self::ENTITY, relation)),
        }
    }
}

impl Row for Employee {
    const ENTITY: &'static str = "Employee";

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>, QueryError> {
        match name {
            "id" => Ok(Some(FieldValue::Long(self.id))),
            "firstName" => Ok(self.first_name.clone().map(FieldValue::Text)),
            "lastName" => Ok(self.last_name.clone().map(FieldValue::Text)),
            "email" => Ok(self.email.clone().map(FieldValue::Text)),
            "phoneNumber" => Ok(self.phone_number.clone().map(FieldValue::Text)),
            "hireDate" => Ok(self.hire_date.map(FieldValue::Instant)),
            "salary" => Ok(self.salary.map(FieldValue::Long)),
            "commissionPct" => Ok(self.commission_pct.map(FieldValue::Long)),
            _ => Err(QueryError::unknown_field(Self::ENTITY, name)),
        }
    }

    fn joined_ids(&self, relation: &str, dataset: &Dataset) -> Result<Vec<i64>, QueryError> {
        match relation {
            "job" => Ok(dataset
                .jobs
                .iter()
                .filter(|job| job.employee_id == Some(self.id))
                .map(|job| job.id)
                .collect()),
            "manager" => Ok(self.manager_id.into_iter().collect()),
            "department" => Ok(self.department_id.into_iter().collect()),
            "jobHistory" => Ok(dataset
                .job_histories
                .iter()
                .filter(|history| history.employee_id == Some(self.id))
                .map(|history| history.id)
                .collect()),
            _ => Err(QueryError::unknown_relation(Self::ENTITY, relation)),
        }
    }
}

impl Row for Job {
    const ENTITY: &'static str = "Job";

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>, QueryError> {
        match name {
            "id" => Ok(Some(FieldValue::Long(self.id))),
            "jobTitle" => Ok(self.job_title.clone().map(FieldValue::Text)),
            "minSalary" => Ok(self.min_salary.map(FieldValue::Long)),
            "maxSalary" => Ok(self.max_salary.map(FieldValue::Long)),
            _ => Err(QueryError::unknown_field(Self::ENTITY, name)),
        }
    }

    fn joined_ids(&self, relation: &str, dataset: &Dataset) -> Result<Vec<i64>, QueryError> {
        match relation {
            "task" => Ok(self.task_ids.clone()),
            "employee" => Ok(self.employee_id.into_iter().collect()),
            "jobHistory" => Ok(dataset
                .job_histories
                .iter()
                .filter(|history| history.job_id == Some(self.id))
                .map(|history| history.id)
                .collect()),
            _ => Err(QueryError::unknown_relation(Self::ENTITY, relation)),
        }
    }
}

impl Row for JobHistory {
    const ENTITY: &'static str = "JobHistory";

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>, QueryError> {
        match name {
            "id" => Ok(Some(FieldValue::Long(self.id))),
            "startDate" => Ok(self.start_date.map(FieldValue::Instant)),
            "endDate" => Ok(self.end_date.map(FieldValue::Instant)),
            "language" => Ok(self.language.map(FieldValue::Language)),
            _ => Err(QueryError::unknown_field(Self::ENTITY, name)),
        }
    }

    fn joined_ids(&self, relation: &str, _dataset: &Dataset) -> Result<Vec<i64>, QueryError> {
        match relation {
            "job" => Ok(self.job_id.into_iter().collect()),
            "department" => Ok(self.department_id.into_iter().collect()),
            "employee" => Ok(self.employee_id.into_iter().collect()),
            _ => Err(QueryError::unknown_relation(Self::ENTITY, relation)),
        }
    }
}
