//! Decode wire-style filter parameters into roster criteria.
//!
//! A parameter key is `field.operator` (`salary.greaterThanOrEqual`,
//! `firstName.contains`, `managerId.specified`); `in`/`notIn` values are
//! comma-separated. Field names are accepted in camelCase or snake_case.
//! The bare `distinct` key carries the deduplication flag.
//!
//! Decoding fails fast: unknown fields, unknown operators and values that
//! cannot be parsed as the field's kind are reported, never dropped.

mod apply;
mod decode;
mod errors;
mod ops;

pub use decode::{
    decode_country_criteria, decode_department_criteria, decode_employee_criteria,
    decode_job_criteria, decode_job_history_criteria, decode_location_criteria,
    decode_region_criteria, decode_task_criteria,
};
pub use errors::ParamError;
pub use ops::FilterOp;
