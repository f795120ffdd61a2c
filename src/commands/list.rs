use crate::model::Employee;
use crate::projection::{employee_to_response, EmployeeResponse};
use crate::query::{self, ListEmployeesRequest};
use crate::store::Repository;

pub fn run<S: Repository<Employee>>(
    store: &S,
    request: &ListEmployeesRequest,
) -> Vec<EmployeeResponse> {
    query::apply(request, store.get_all())
        .iter()
        .map(employee_to_response)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryRepository;

    #[test]
    fn lists_everything_by_default() {
        let store = InMemoryRepository::new();
        store.create(Employee::new("John", "Smith"));
        store.create(Employee::new("Jane", "Doe"));

        let responses = run(&store, &ListEmployeesRequest::default());
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].first_name, "John");
        assert_eq!(responses[1].first_name, "Jane");
    }

    #[test]
    fn filters_narrow_the_listing() {
        let store = InMemoryRepository::new();
        store.create(Employee::new("John", "Smith"));
        store.create(Employee::new("Jane", "Doe"));

        let request = ListEmployeesRequest {
            first_name_contains: Some("John".to_string()),
            ..Default::default()
        };

        let responses = run(&store, &request);
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].first_name, "John");
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store: InMemoryRepository<Employee> = InMemoryRepository::new();
        assert!(run(&store, &ListEmployeesRequest::default()).is_empty());
    }
}
