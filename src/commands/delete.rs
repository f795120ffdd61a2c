use crate::model::Employee;
use crate::store::{RecordId, Repository};

/// Removes the employee and, with it, the owned benefit collection.
pub fn run<S: Repository<Employee>>(store: &S, id: RecordId) -> bool {
    let removed = store.delete(id);
    if removed {
        tracing::info!(id, "employee deleted");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryRepository;

    #[test]
    fn deletes_existing_records() {
        let store = InMemoryRepository::new();
        let created = store.create(Employee::new("John", "Smith"));

        assert!(run(&store, created.id));
        assert!(store.get_by_id(created.id).is_none());
    }

    #[test]
    fn unknown_identity_reports_absence() {
        let store: InMemoryRepository<Employee> = InMemoryRepository::new();
        assert!(!run(&store, 99999));
    }
}
