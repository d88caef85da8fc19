//! Core criteria filtering and query execution for the roster HR domain.
//!
//! Callers describe what they want through per-entity criteria aggregates
//! (collections of optional per-field filters), which the query services
//! translate into composable predicates and hand to a backing store.

pub mod criteria;
pub mod domain;
pub mod filter;
pub mod query;
pub mod service;
pub mod store;

pub use domain::{
    Country, Department, Employee, FieldValue, Instant, Job, JobHistory, Language, Location,
    Region, Task,
};
