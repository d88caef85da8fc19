//! The roster entity model: regions, countries, locations, departments,
//! tasks, employees, jobs and job histories.
//!
//! Entities are plain rows with an `i64` identity. Relationships are stored
//! as foreign-key ids on the owning side (`Job` additionally owns its side of
//! the job/task association); reverse directions are resolved by the store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time value used by temporal entity fields.
pub type Instant = DateTime<Utc>;

/// Language spoken during a job history period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    French,
    English,
    Spanish,
}

impl Language {
    /// Parse a wire value like `FRENCH` (case-insensitive).
    pub fn parse(value: &str) -> Option<Language> {
        match value.to_ascii_uppercase().as_str() {
            "FRENCH" => Some(Language::French),
            "ENGLISH" => Some(Language::English),
            "SPANISH" => Some(Language::Spanish),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::French => "FRENCH",
            Language::English => "ENGLISH",
            Language::Spanish => "SPANISH",
        };
        write!(f, "{}", name)
    }
}

/// Scalar value of one entity field, as seen by predicates.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Long(i64),
    Text(String),
    Bool(bool),
    Instant(Instant),
    Language(Language),
}

impl FieldValue {
    /// Returns the kind name of this value for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Long(_) => "Long",
            FieldValue::Text(_) => "Text",
            FieldValue::Bool(_) => "Boolean",
            FieldValue::Instant(_) => "Instant",
            FieldValue::Language(_) => "Language",
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Long(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Instant> for FieldValue {
    fn from(value: Instant) -> Self {
        FieldValue::Instant(value)
    }
}

impl From<Language> for FieldValue {
    fn from(value: Language) -> Self {
        FieldValue::Language(value)
    }
}

/// A geographic region grouping countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: i64,
    pub region_name: Option<String>,
}

impl Region {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            region_name: None,
        }
    }

    pub fn with_region_name(mut self, name: impl Into<String>) -> Self {
        self.region_name = Some(name.into());
        self
    }
}

/// A country, belonging to at most one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i64,
    pub country_name: Option<String>,
    pub region_id: Option<i64>,
}

impl Country {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            country_name: None,
            region_id: None,
        }
    }

    pub fn with_country_name(mut self, name: impl Into<String>) -> Self {
        self.country_name = Some(name.into());
        self
    }

    pub fn with_region(mut self, region_id: i64) -> Self {
        self.region_id = Some(region_id);
        self
    }
}

/// A physical location inside a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub country_id: Option<i64>,
}

impl Location {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            street_address: None,
            postal_code: None,
            city: None,
            state_province: None,
            country_id: None,
        }
    }

    pub fn with_street_address(mut self, value: impl Into<String>) -> Self {
        self.street_address = Some(value.into());
        self
    }

    pub fn with_postal_code(mut self, value: impl Into<String>) -> Self {
        self.postal_code = Some(value.into());
        self
    }

    pub fn with_city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn with_state_province(mut self, value: impl Into<String>) -> Self {
        self.state_province = Some(value.into());
        self
    }

    pub fn with_country(mut self, country_id: i64) -> Self {
        self.country_id = Some(country_id);
        self
    }
}

/// An organizational department housed at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub department_name: Option<String>,
    pub location_id: Option<i64>,
}

impl Department {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            department_name: None,
            location_id: None,
        }
    }

    pub fn with_department_name(mut self, name: impl Into<String>) -> Self {
        self.department_name = Some(name.into());
        self
    }

    pub fn with_location(mut self, location_id: i64) -> Self {
        self.location_id = Some(location_id);
        self
    }
}

/// A unit of work that jobs can be associated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Task {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: None,
            description: None,
        }
    }

    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }
}

/// An employee, optionally reporting to a manager and assigned to a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub hire_date: Option<Instant>,
    pub salary: Option<i64>,
    pub commission_pct: Option<i64>,
    pub manager_id: Option<i64>,
    pub department_id: Option<i64>,
}

impl Employee {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            email: None,
            phone_number: None,
            hire_date: None,
            salary: None,
            commission_pct: None,
            manager_id: None,
            department_id: None,
        }
    }

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn with_phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    pub fn with_hire_date(mut self, value: Instant) -> Self {
        self.hire_date = Some(value);
        self
    }

    pub fn with_salary(mut self, value: i64) -> Self {
        self.salary = Some(value);
        self
    }

    pub fn with_commission_pct(mut self, value: i64) -> Self {
        self.commission_pct = Some(value);
        self
    }

    pub fn with_manager(mut self, manager_id: i64) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    pub fn with_department(mut self, department_id: i64) -> Self {
        self.department_id = Some(department_id);
        self
    }
}

/// A job position, optionally held by an employee and linked to tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub job_title: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub employee_id: Option<i64>,
    /// Owning side of the job/task association.
    pub task_ids: Vec<i64>,
}

impl Job {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            job_title: None,
            min_salary: None,
            max_salary: None,
            employee_id: None,
            task_ids: Vec::new(),
        }
    }

    pub fn with_job_title(mut self, value: impl Into<String>) -> Self {
        self.job_title = Some(value.into());
        self
    }

    pub fn with_min_salary(mut self, value: i64) -> Self {
        self.min_salary = Some(value);
        self
    }

    pub fn with_max_salary(mut self, value: i64) -> Self {
        self.max_salary = Some(value);
        self
    }

    pub fn with_employee(mut self, employee_id: i64) -> Self {
        self.employee_id = Some(employee_id);
        self
    }

    pub fn with_task(mut self, task_id: i64) -> Self {
        self.task_ids.push(task_id);
        self
    }
}

/// A historical record of an employee holding a job in a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobHistory {
    pub id: i64,
    pub start_date: Option<Instant>,
    pub end_date: Option<Instant>,
    pub language: Option<Language>,
    pub job_id: Option<i64>,
    pub department_id: Option<i64>,
    pub employee_id: Option<i64>,
}

impl JobHistory {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            start_date: None,
            end_date: None,
            language: None,
            job_id: None,
            department_id: None,
            employee_id: None,
        }
    }

    pub fn with_start_date(mut self, value: Instant) -> Self {
        self.start_date = Some(value);
        self
    }

    pub fn with_end_date(mut self, value: Instant) -> Self {
        self.end_date = Some(value);
        self
    }

    pub fn with_language(mut self, value: Language) -> Self {
        self.language = Some(value);
        self
    }

    pub fn with_job(mut self, job_id: i64) -> Self {
        self.job_id = Some(job_id);
        self
    }

    pub fn with_department(mut self, department_id: i64) -> Self {
        self.department_id = Some(department_id);
        self
    }

    pub fn with_employee(mut self, employee_id: i64) -> Self {
        self.employee_id = Some(employee_id);
        self
    }
}
