use serde::{Deserialize, Serialize};

use crate::model::Employee;
use crate::projection::{employee_to_response, EmployeeResponse};
use crate::store::{RecordId, Repository};

/// Payload for updating an employee's contact fields. Identity and names
/// are not updatable through this path; the stored values for these seven
/// fields are replaced wholesale with whatever the payload carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateEmployeeRequest {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

pub fn run<S: Repository<Employee>>(
    store: &S,
    id: RecordId,
    request: &UpdateEmployeeRequest,
) -> Option<EmployeeResponse> {
    let mut employee = store.get_by_id(id)?;

    employee.address1 = request.address1.clone();
    employee.address2 = request.address2.clone();
    employee.city = request.city.clone();
    employee.state = request.state.clone();
    employee.zip_code = request.zip_code.clone();
    employee.phone_number = request.phone_number.clone();
    employee.email = request.email.clone();

    store.update(employee.clone());
    tracing::info!(id, "employee updated");
    Some(employee_to_response(&employee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryRepository;

    #[test]
    fn overwrites_contact_fields() {
        let store = InMemoryRepository::new();
        let created = store.create(Employee::new("John", "Smith"));

        let request = UpdateEmployeeRequest {
            address1: Some("17 Elm Street".to_string()),
            city: Some("Other town".to_string()),
            ..Default::default()
        };

        let response = run(&store, created.id, &request).unwrap();
        assert_eq!(response.address1.as_deref(), Some("17 Elm Street"));
        assert_eq!(response.city.as_deref(), Some("Other town"));

        let stored = store.get_by_id(created.id).unwrap();
        assert_eq!(stored.address1.as_deref(), Some("17 Elm Street"));
    }

    #[test]
    fn identity_and_names_survive_an_update() {
        let store = InMemoryRepository::new();
        let created = store.create(Employee::new("John", "Smith"));

        run(&store, created.id, &UpdateEmployeeRequest::default()).unwrap();

        let stored = store.get_by_id(created.id).unwrap();
        assert_eq!(stored.id, created.id);
        assert_eq!(stored.first_name, "John");
        assert_eq!(stored.last_name, "Smith");
    }

    #[test]
    fn absent_identity_is_none() {
        let store: InMemoryRepository<Employee> = InMemoryRepository::new();
        assert!(run(&store, 99999, &UpdateEmployeeRequest::default()).is_none());
    }
}
