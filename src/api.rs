//! # API Facade
//!
//! [`RosterApi`] is the single entry point a transport talks to. For each
//! operation it runs the validation pipeline against the inbound payload,
//! short-circuits with the error report when any rule fails, and otherwise
//! dispatches to the command layer.
//!
//! The three outcomes a transport has to tell apart stay distinct in the
//! signatures: success carries data, validation failure is
//! [`RosterError::Validation`] with the full report, and absence is a plain
//! `None`/`false`. Mapping those onto wire-level status codes is the
//! transport's job, not this crate's.
//!
//! ## Generic over the store
//!
//! `RosterApi<S: Repository<Employee>>` takes any store implementation:
//! the in-memory one here, or a durable engine supplied by the surrounding
//! system. Tests run the whole facade against [`InMemoryRepository`]
//! without further setup.
//!
//! [`InMemoryRepository`]: crate::store::memory::InMemoryRepository

use crate::commands;
use crate::error::{Result, RosterError};
use crate::model::Employee;
use crate::projection::{EmployeeBenefitResponse, EmployeeResponse};
use crate::query::ListEmployeesRequest;
use crate::store::{RecordId, Repository};
use crate::validation::{employee, ValidationContext, ValidatorRegistry};

pub struct RosterApi<S: Repository<Employee>> {
    store: S,
    validators: ValidatorRegistry,
}

impl<S: Repository<Employee>> RosterApi<S> {
    /// Builds the facade with the standard employee validators installed.
    pub fn new(store: S) -> Result<Self> {
        let mut validators = ValidatorRegistry::new();
        employee::register_employee_validators(&mut validators)?;
        Ok(Self { store, validators })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and creates. Returns the stored record so the caller can
    /// point at the new identity.
    pub fn create_employee(&self, request: CreateEmployeeRequest) -> Result<Employee> {
        let ctx = ValidationContext::new(&self.store);
        let report = self.validators.validate(&request, &ctx);
        if !report.is_empty() {
            tracing::debug!(fields = report.field_count(), "create rejected by validation");
            return Err(RosterError::Validation(report));
        }
        Ok(commands::create::run(&self.store, request))
    }

    pub fn get_employee(&self, id: RecordId) -> Option<EmployeeResponse> {
        commands::get::run(&self.store, id)
    }

    pub fn list_employees(&self, request: &ListEmployeesRequest) -> Vec<EmployeeResponse> {
        commands::list::run(&self.store, request)
    }

    /// Validates with the path identity in context, then updates. `Ok(None)`
    /// when no record carries that identity.
    pub fn update_employee(
        &self,
        id: RecordId,
        request: &UpdateEmployeeRequest,
    ) -> Result<Option<EmployeeResponse>> {
        let ctx = ValidationContext::for_record(&self.store, id);
        let report = self.validators.validate(request, &ctx);
        if !report.is_empty() {
            tracing::debug!(id, fields = report.field_count(), "update rejected by validation");
            return Err(RosterError::Validation(report));
        }
        Ok(commands::update::run(&self.store, id, request))
    }

    pub fn delete_employee(&self, id: RecordId) -> bool {
        commands::delete::run(&self.store, id)
    }

    pub fn employee_benefits(&self, id: RecordId) -> Option<Vec<EmployeeBenefitResponse>> {
        commands::benefits::run(&self.store, id)
    }
}

pub use crate::commands::create::CreateEmployeeRequest;
pub use crate::commands::update::UpdateEmployeeRequest;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryRepository;

    fn api() -> RosterApi<InMemoryRepository<Employee>> {
        RosterApi::new(InMemoryRepository::new()).unwrap()
    }

    #[test]
    fn create_returns_the_stored_record() {
        let api = api();
        let created = api
            .create_employee(CreateEmployeeRequest {
                first_name: Some("John".to_string()),
                last_name: Some("Smith".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(api.get_employee(created.id).unwrap().first_name, "John");
    }

    #[test]
    fn create_surfaces_the_error_report() {
        let api = api();
        let err = api
            .create_employee(CreateEmployeeRequest::default())
            .unwrap_err();

        let report = err.report().expect("validation failure");
        assert!(report.contains("FirstName"));
        assert!(report.contains("LastName"));
        assert!(api.list_employees(&ListEmployeesRequest::default()).is_empty());
    }

    #[test]
    fn update_distinguishes_absence_from_validation_failure() {
        let api = api();

        // Unknown identity with a passing payload: absence.
        let outcome = api
            .update_employee(99999, &UpdateEmployeeRequest::default())
            .unwrap();
        assert!(outcome.is_none());

        // Known identity with a failing payload: report.
        let mut employee = Employee::new("John", "Smith");
        employee.address1 = Some("123 Main Street".to_string());
        let created = api.store().create(employee);

        let err = api
            .update_employee(created.id, &UpdateEmployeeRequest::default())
            .unwrap_err();
        assert!(err.report().unwrap().contains("Address1"));
    }

    #[test]
    fn delete_round_trips_through_the_store() {
        let api = api();
        let created = api
            .create_employee(CreateEmployeeRequest {
                first_name: Some("Jane".to_string()),
                last_name: Some("Doe".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(api.delete_employee(created.id));
        assert!(api.get_employee(created.id).is_none());
        assert!(!api.delete_employee(created.id));
    }
}
