//! Per-entity decoders from parameter pairs to criteria aggregates.

use convert_case::{Case, Casing};
use log::debug;
use roster_core::criteria::{
    CountryCriteria, DepartmentCriteria, EmployeeCriteria, JobCriteria, JobHistoryCriteria,
    LocationCriteria, RegionCriteria, TaskCriteria,
};

use crate::apply::{apply_instant, apply_language, apply_long, apply_string, parse_bool};
use crate::errors::ParamError;
use crate::ops::FilterOp;

/// A classified parameter key.
enum Key {
    /// The bare `distinct` flag.
    Distinct,
    /// A `field.operator` filter key, field name normalized to camelCase.
    Filter { field: String, op: FilterOp },
}

/// Classify a key, normalizing the field name so `first_name.contains` and
/// `firstName.contains` address the same filter.
fn classify_key(key: &str) -> Result<Key, ParamError> {
    match key.rsplit_once('.') {
        None => {
            if key.to_case(Case::Camel) == "distinct" {
                Ok(Key::Distinct)
            } else {
                Err(ParamError::MissingOperator {
                    key: key.to_string(),
                })
            }
        }
        Some((raw_field, suffix)) => {
            let field = raw_field.to_case(Case::Camel);
            let op = FilterOp::parse(suffix).ok_or_else(|| ParamError::UnknownOperator {
                field: field.clone(),
                operator: suffix.to_string(),
            })?;
            Ok(Key::Filter { field, op })
        }
    }
}

/// Decode region filter parameters.
pub fn decode_region_criteria(params: &[(String, String)]) -> Result<RegionCriteria, ParamError> {
    let mut criteria = RegionCriteria::new();
    for (key, value) in params {
        match classify_key(key)? {
            Key::Distinct => criteria.distinct = Some(parse_bool("distinct", value)?),
            Key::Filter { field, op } => match field.as_str() {
                "id" => apply_long(criteria.id(), &field, op, value)?,
                "regionName" => apply_string(criteria.region_name(), &field, op, value)?,
                "countryId" => apply_long(criteria.country_id(), &field, op, value)?,
                _ => {
                    return Err(ParamError::UnknownField {
                        entity: "Region",
                        field,
                    });
                }
            },
        }
    }
    debug!("decoded criteria : {}", criteria);
    Ok(criteria)
}

/// Decode country filter parameters.
pub fn decode_country_criteria(params: &[(String, String)]) -> Result<CountryCriteria, ParamError> {
    let mut criteria = CountryCriteria::new();
    for (key, value) in params {
        match classify_key(key)? {
            Key::Distinct => criteria.distinct = Some(parse_bool("distinct", value)?),
            Key::Filter { field, op } => match field.as_str() {
                "id" => apply_long(criteria.id(), &field, op, value)?,
                "countryName" => apply_string(criteria.country_name(), &field, op, value)?,
                "regionId" => apply_long(criteria.region_id(), &field, op, value)?,
                "locationId" => apply_long(criteria.location_id(), &field, op, value)?,
                _ => {
                    return Err(ParamError::UnknownField {
                        entity: "Country",
                        field,
                    });
                }
            },
        }
    }
    debug!("decoded criteria : {}", criteria);
    Ok(criteria)
}

/// Decode location filter parameters.
pub fn decode_location_criteria(
    params: &[(String, String)],
) -> Result<LocationCriteria, ParamError> {
    let mut criteria = LocationCriteria::new();
    for (key, value) in params {
        match classify_key(key)? {
            Key::Distinct => criteria.distinct = Some(parse_bool("distinct", value)?),
            Key::Filter { field, op } => match field.as_str() {
                "id" => apply_long(criteria.id(), &field, op, value)?,
                "streetAddress" => apply_string(criteria.street_address(), &field, op, value)?,
                "postalCode" => apply_string(criteria.postal_code(), &field, op, value)?,
                "city" => apply_string(criteria.city(), &field, op, value)?,
                "stateProvince" => apply_string(criteria.state_province(), &field, op, value)?,
                "countryId" => apply_long(criteria.country_id(), &field, op, value)?,
                "departmentId" => apply_long(criteria.department_id(), &field, op, value)?,
                _ => {
                    return Err(ParamError::UnknownField {
                        entity: "Location",
                        field,
                    });
                }
            },
        }
    }
    debug!("decoded criteria : {}", criteria);
    Ok(criteria)
}

/// Decode department filter parameters.
pub fn decode_department_criteria(
    params: &[(String, String)],
) -> Result<DepartmentCriteria, ParamError> {
    let mut criteria = DepartmentCriteria::new();
    for (key, value) in params {
        match classify_key(key)? {
            Key::Distinct => criteria.distinct = Some(parse_bool("distinct", value)?),
            Key::Filter { field, op } => match field.as_str() {
                "id" => apply_long(criteria.id(), &field, op, value)?,
                "departmentName" => {
                    apply_string(criteria.department_name(), &field, op, value)?
                }
                "locationId" => apply_long(criteria.location_id(), &field, op, value)?,
                "employeeId" => apply_long(criteria.employee_id(), &field, op, value)?,
                "jobHistoryId" => apply_long(criteria.job_history_id(), &field, op, value)?,
                _ => {
                    return Err(ParamError::UnknownField {
                        entity: "Department",
                        field,
                    });
                }
            },
        }
    }
    debug!("decoded criteria : {}", criteria);
    Ok(criteria)
}

/// Decode task filter parameters.
pub fn decode_task_criteria(params: &[(String, String)]) -> Result<TaskCriteria, ParamError> {
    let mut criteria = TaskCriteria::new();
    for (key, value) in params {
        match classify_key(key)? {
            Key::Distinct => criteria.distinct = Some(parse_bool("distinct", value)?),
            Key::Filter { field, op } => match field.as_str() {
                "id" => apply_long(criteria.id(), &field, op, value)?,
                "title" => apply_string(criteria.title(), &field, op, value)?,
                "description" => apply_string(criteria.description(), &field, op, value)?,
                "jobId" => apply_long(criteria.job_id(), &field, op, value)?,
                _ => {
                    return Err(ParamError::UnknownField {
                        entity: "Task",
                        field,
                    });
                }
            },
        }
    }
    debug!("decoded criteria : {}", criteria);
    Ok(criteria)
}

/// Decode employee filter parameters.
pub fn decode_employee_criteria(
    params: &[(String, String)],
) -> Result<EmployeeCriteria, ParamError> {
    let mut criteria = EmployeeCriteria::new();
    for (key, value) in params {
        match classify_key(key)? {
            Key::Distinct => criteria.distinct = Some(parse_bool("distinct", value)?),
            Key::Filter { field, op } => match field.as_str() {
                "id" => apply_long(criteria.id(), &field, op, value)?,
                "firstName" => apply_string(criteria.first_name(), &field, op, value)?,
                "lastName" => apply_string(criteria.last_name(), &field, op, value)?,
                "email" => apply_string(criteria.email(), &field, op, value)?,
                "phoneNumber" => apply_string(criteria.phone_number(), &field, op, value)?,
                "hireDate" => apply_instant(criteria.hire_date(), &field, op, value)?,
                "salary" => apply_long(criteria.salary(), &field, op, value)?,
                "commissionPct" => apply_long(criteria.commission_pct(), &field, op, value)?,
                "jobId" => apply_long(criteria.job_id(), &field, op, value)?,
                "managerId" => apply_long(criteria.manager_id(), &field, op, value)?,
                "departmentId" => apply_long(criteria.department_id(), &field, op, value)?,
                "jobHistoryId" => apply_long(criteria.job_history_id(), &field, op, value)?,
                _ => {
                    return Err(ParamError::UnknownField {
                        entity: "Employee",
                        field,
                    });
                }
            },
        }
    }
    debug!("decoded criteria : {}", criteria);
    Ok(criteria)
}

/// Decode job filter parameters.
pub fn decode_job_criteria(params: &[(String, String)]) -> Result<JobCriteria, ParamError> {
    let mut criteria = JobCriteria::new();
    for (key, value) in params {
        match classify_key(key)? {
            Key::Distinct => criteria.distinct = Some(parse_bool("distinct", value)?),
            Key::Filter { field, op } => match field.as_str() {
                "id" => apply_long(criteria.id(), &field, op, value)?,
                "jobTitle" => apply_string(criteria.job_title(), &field, op, value)?,
                "minSalary" => apply_long(criteria.min_salary(), &field, op, value)?,
                "maxSalary" => apply_long(criteria.max_salary(), &field, op, value)?,
                "taskId" => apply_long(criteria.task_id(), &field, op, value)?,
                "employeeId" => apply_long(criteria.employee_id(), &field, op, value)?,
                "jobHistoryId" => apply_long(criteria.job_history_id(), &field, op, value)?,
                _ => {
                    return Err(ParamError::UnknownField {
                        entity: "Job",
                        field,
                    });
                }
            },
        }
    }
    debug!("decoded criteria : {}", criteria);
    Ok(criteria)
}

/// Decode job history filter parameters.
pub fn decode_job_history_criteria(
    params: &[(String, String)],
) -> Result<JobHistoryCriteria, ParamError> {
    let mut criteria = JobHistoryCriteria::new();
    for (key, value) in params {
        match classify_key(key)? {
            Key::Distinct => criteria.distinct = Some(parse_bool("distinct", value)?),
            Key::Filter { field, op } => match field.as_str() {
                "id" => apply_long(criteria.id(), &field, op, value)?,
                "startDate" => apply_instant(criteria.start_date(), &field, op, value)?,
                "endDate" => apply_instant(criteria.end_date(), &field, op, value)?,
                "language" => apply_language(criteria.language(), &field, op, value)?,
                "jobId" => apply_long(criteria.job_id(), &field, op, value)?,
                "departmentId" => apply_long(criteria.department_id(), &field, op, value)?,
                "employeeId" => apply_long(criteria.employee_id(), &field, op, value)?,
                _ => {
                    return Err(ParamError::UnknownField {
                        entity: "JobHistory",
                        field,
                    });
                }
            },
        }
    }
    debug!("decoded criteria : {}", criteria);
    Ok(criteria)
}
