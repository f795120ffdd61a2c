use crate::model::Employee;
use crate::projection::{employee_to_response, EmployeeResponse};
use crate::store::{RecordId, Repository};

pub fn run<S: Repository<Employee>>(store: &S, id: RecordId) -> Option<EmployeeResponse> {
    store.get_by_id(id).map(|e| employee_to_response(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryRepository;

    #[test]
    fn returns_projected_record() {
        let store = InMemoryRepository::new();
        let created = store.create(Employee::new("John", "Smith"));

        let response = run(&store, created.id).unwrap();
        assert_eq!(response.first_name, "John");
        assert_eq!(response.last_name, "Smith");
    }

    #[test]
    fn absent_identity_is_none() {
        let store: InMemoryRepository<Employee> = InMemoryRepository::new();
        assert!(run(&store, 99999).is_none());
    }

    #[test]
    fn repeated_reads_are_equal_without_mutation() {
        let store = InMemoryRepository::new();
        let created = store.create(Employee::new("John", "Smith"));

        let first = run(&store, created.id).unwrap();
        let second = run(&store, created.id).unwrap();
        assert_eq!(first, second);
    }
}
