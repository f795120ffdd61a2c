//! Default dataset loading.
//!
//! The surrounding application decides when (and whether) to seed; this
//! module only knows what the default roster looks like.

use rust_decimal::Decimal;

use crate::model::{BenefitType, Employee, EmployeeBenefit};
use crate::store::Repository;

/// Loads the default roster into an empty store. A store that already holds
/// records is left untouched. Returns how many records were inserted.
pub fn load_default_roster<S: Repository<Employee>>(store: &S) -> usize {
    if !store.get_all().is_empty() {
        return 0;
    }

    let roster = default_roster();
    let count = roster.len();
    for employee in roster {
        store.create(employee);
    }
    tracing::info!(count, "seeded default roster");
    count
}

fn default_roster() -> Vec<Employee> {
    let mut john = Employee::new("John", "Doe").with_benefits(vec![
        EmployeeBenefit::new(BenefitType::Health, Decimal::new(10000, 2)),
        EmployeeBenefit::new(BenefitType::Dental, Decimal::new(5000, 2)),
    ]);
    john.social_security_number = Some("123-45-6789".to_string());
    john.address1 = Some("123 Main St".to_string());
    john.city = Some("Any town".to_string());
    john.state = Some("NY".to_string());
    john.zip_code = Some("12345".to_string());
    john.phone_number = Some("555-123-4567".to_string());
    john.email = Some("john.doe@example.com".to_string());

    let mut jane = Employee::new("Jane", "Smith").with_benefits(vec![
        EmployeeBenefit::new(BenefitType::Health, Decimal::new(12000, 2)),
        EmployeeBenefit::new(BenefitType::Vision, Decimal::new(3000, 2)),
    ]);
    jane.social_security_number = Some("987-65-4321".to_string());
    jane.address1 = Some("456 Elm St".to_string());
    jane.address2 = Some("Apt 2B".to_string());
    jane.city = Some("Other town".to_string());
    jane.state = Some("CA".to_string());
    jane.zip_code = Some("98765".to_string());
    jane.phone_number = Some("555-987-6543".to_string());
    jane.email = Some("jane.smith@example.com".to_string());

    vec![john, jane]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryRepository;

    #[test]
    fn seeds_an_empty_store() {
        let store = InMemoryRepository::new();
        assert_eq!(load_default_roster(&store), 2);

        let employees = store.get_all();
        assert_eq!(employees[0].first_name, "John");
        assert_eq!(employees[0].benefits.len(), 2);
        assert_eq!(employees[1].first_name, "Jane");
        assert_eq!(employees[1].address2.as_deref(), Some("Apt 2B"));
    }

    #[test]
    fn leaves_a_populated_store_alone() {
        let store = InMemoryRepository::new();
        store.create(Employee::new("Existing", "Record"));

        assert_eq!(load_default_roster(&store), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn seeded_benefits_are_anchored_to_their_owner() {
        let store = InMemoryRepository::new();
        load_default_roster(&store);

        for employee in store.get_all() {
            assert!(employee
                .benefits
                .iter()
                .all(|b| b.employee_id == employee.id && b.id > 0));
        }
    }
}
