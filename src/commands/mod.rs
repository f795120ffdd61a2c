//! # Command Layer
//!
//! One module per operation, each a pure function generic over the store
//! trait. Commands hold the business logic; they do no validation (the API
//! layer runs the pipeline first) and no I/O beyond the store, and they
//! return plain data for the caller to render.
//!
//! Absence is always a value: `Option` for reads and updates, `bool` for
//! delete. Nothing here raises a fault for an unknown identity.
//!
//! - [`create`]: build and store a new employee
//! - [`get`]: fetch one employee, projected
//! - [`list`]: filtered, paged, projected enumeration
//! - [`update`]: overwrite an existing employee's contact fields
//! - [`delete`]: remove an employee and its benefits
//! - [`benefits`]: an employee's benefit line items, projected

pub mod benefits;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
