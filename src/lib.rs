//! # Rosterapp Architecture
//!
//! Rosterapp is a **transport-agnostic employee record-management core**.
//! It owns the record store, the validation pipeline, the list pipeline,
//! and the record-to-response projection. Everything wire-shaped (HTTP
//! routing, JSON transport, status codes, bootstrap wiring) belongs to the
//! embedding application.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Runs the validation pipeline per inbound payload         │
//! │  - Short-circuits with an ErrorReport on failure            │
//! │  - Dispatches to commands, returns structured outcomes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One pure function per operation                          │
//! │  - Generic over the store trait, no I/O assumptions         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Repository<T> trait: keyed CRUD + identity assignment    │
//! │  - InMemoryRepository (in-process), durable engines extern  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cross-cutting, used by the layers rather than sitting between them:
//! `validation/` (type-keyed rulesets producing field-indexed reports),
//! `query` (filter-then-page list narrowing), and `projection` (the single
//! stored-shape → response-shape path).
//!
//! ## Outcome Shapes
//!
//! Callers always get one of three distinguishable outcomes: data on
//! success, [`RosterError::Validation`] carrying the full field report, or
//! a plain `None`/`false` for absence. Nothing in this crate panics on bad
//! input or raises a fault for an unknown identity.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (record mutations at info, validation
//! rejections at debug) and never installs a subscriber; that is the
//! embedding application's call.

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod projection;
pub mod query;
pub mod seed;
pub mod store;
pub mod validation;

pub use api::{CreateEmployeeRequest, RosterApi, UpdateEmployeeRequest};
pub use error::{Result, RosterError};
pub use model::{BenefitType, Employee, EmployeeBenefit};
pub use projection::{EmployeeBenefitResponse, EmployeeResponse};
pub use query::ListEmployeesRequest;
pub use store::memory::InMemoryRepository;
pub use store::{RecordId, Repository};
pub use validation::{ErrorReport, ValidatorRegistry};
