use crate::model::Employee;
use crate::projection::{benefit_to_response, EmployeeBenefitResponse};
use crate::store::{RecordId, Repository};

/// An employee's benefit line items, projected in their original order.
/// `None` when the employee does not exist; an employee without benefits
/// yields an empty list.
pub fn run<S: Repository<Employee>>(
    store: &S,
    id: RecordId,
) -> Option<Vec<EmployeeBenefitResponse>> {
    store
        .get_by_id(id)
        .map(|employee| employee.benefits.iter().map(benefit_to_response).collect())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::model::{BenefitType, EmployeeBenefit};
    use crate::store::memory::InMemoryRepository;

    #[test]
    fn projects_the_benefit_collection() {
        let store = InMemoryRepository::new();
        let created = store.create(Employee::new("John", "Smith").with_benefits(vec![
            EmployeeBenefit::new(BenefitType::Health, Decimal::new(10000, 2)),
            EmployeeBenefit::new(BenefitType::Dental, Decimal::new(5000, 2)),
        ]));

        let benefits = run(&store, created.id).unwrap();
        assert_eq!(benefits.len(), 2);
        assert_eq!(benefits[0].benefit_type, BenefitType::Health);
        assert_eq!(benefits[1].cost, Decimal::new(5000, 2));
        assert!(benefits.iter().all(|b| b.employee_id == created.id));
    }

    #[test]
    fn employee_without_benefits_yields_empty_list() {
        let store = InMemoryRepository::new();
        let created = store.create(Employee::new("Jane", "Doe"));

        assert_eq!(run(&store, created.id).unwrap(), Vec::new());
    }

    #[test]
    fn absent_employee_is_none() {
        let store: InMemoryRepository<Employee> = InMemoryRepository::new();
        assert!(run(&store, 99999).is_none());
    }
}
