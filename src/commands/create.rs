use serde::{Deserialize, Serialize};

use crate::model::Employee;
use crate::store::Repository;

/// Payload for creating an employee. Every field is optional at the type
/// level; the validation pipeline enforces the required ones. Benefits are
/// not part of this payload: they enter only through direct record
/// creation and seeding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub social_security_number: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// Builds the record and hands it to the store for identity assignment.
/// Returns the stored record so the caller can point at the new identity.
pub fn run<S: Repository<Employee>>(store: &S, request: CreateEmployeeRequest) -> Employee {
    let employee = Employee {
        id: 0,
        first_name: request.first_name.unwrap_or_default(),
        last_name: request.last_name.unwrap_or_default(),
        social_security_number: request.social_security_number,
        address1: request.address1,
        address2: request.address2,
        city: request.city,
        state: request.state,
        zip_code: request.zip_code,
        phone_number: request.phone_number,
        email: request.email,
        benefits: Vec::new(),
    };

    let created = store.create(employee);
    tracing::info!(id = created.id, "employee created");
    created
}
