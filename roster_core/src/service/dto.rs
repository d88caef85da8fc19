//! Transfer objects returned by the query services.
//!
//! Relations are carried as by-id stubs (`RelatedRef`), never as embedded
//! entities.

use serde::{Deserialize, Serialize};

use crate::domain::{Instant, Language};

/// By-id stub for a related entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedRef {
    pub id: i64,
}

impl RelatedRef {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: i64,
    pub region_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub id: i64,
    pub country_name: Option<String>,
    pub region: Option<RelatedRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub id: i64,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub country: Option<RelatedRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: i64,
    pub department_name: Option<String>,
    pub location: Option<RelatedRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub hire_date: Option<Instant>,
    pub salary: Option<i64>,
    pub commission_pct: Option<i64>,
    pub manager: Option<RelatedRef>,
    pub department: Option<RelatedRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: i64,
    pub job_title: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub employee: Option<RelatedRef>,
    pub tasks: Vec<RelatedRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobHistoryDto {
    pub id: i64,
    pub start_date: Option<Instant>,
    pub end_date: Option<Instant>,
    pub language: Option<Language>,
    pub job: Option<RelatedRef>,
    pub department: Option<RelatedRef>,
    pub employee: Option<RelatedRef>,
}
