use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{Keyed, RecordId, Repository};

struct Inner<T> {
    records: BTreeMap<RecordId, T>,
    next_id: RecordId,
}

/// In-memory record store.
///
/// A `parking_lot::RwLock` guards the map and the identity counter
/// together, so concurrent `create` calls can never hand out the same
/// identity and mutations are serialized at whole-record granularity.
/// Identities are monotonically increasing; iteration order of the
/// `BTreeMap` is therefore insertion order.
pub struct InMemoryRepository<T> {
    inner: RwLock<Inner<T>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    /// Drops every record and restarts identity assignment from 1. The only
    /// sanctioned way a previously used identity can recur.
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        inner.records.clear();
        inner.next_id = 1;
    }
}

impl<T: Keyed + Clone + Send + Sync> Repository<T> for InMemoryRepository<T> {
    fn create(&self, mut record: T) -> T {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        record.assign_id(id);
        inner.records.insert(id, record.clone());
        record
    }

    fn get_by_id(&self, id: RecordId) -> Option<T> {
        self.inner.read().records.get(&id).cloned()
    }

    fn get_all(&self) -> Vec<T> {
        self.inner.read().records.values().cloned().collect()
    }

    fn update(&self, record: T) {
        let mut inner = self.inner.write();
        let id = record.id();
        if let Some(slot) = inner.records.get_mut(&id) {
            *slot = record;
        }
    }

    fn delete(&self, id: RecordId) -> bool {
        self.inner.write().records.remove(&id).is_some()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use rust_decimal::Decimal;

    use super::InMemoryRepository;
    use crate::model::{BenefitType, Employee, EmployeeBenefit};
    use crate::store::Repository;

    pub struct RosterFixture {
        pub employees: InMemoryRepository<Employee>,
    }

    impl Default for RosterFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RosterFixture {
        pub fn new() -> Self {
            Self {
                employees: InMemoryRepository::new(),
            }
        }

        pub fn with_employee(self, first_name: &str, last_name: &str) -> Self {
            self.employees.create(Employee::new(first_name, last_name));
            self
        }

        pub fn with_contact_employee(
            self,
            first_name: &str,
            last_name: &str,
            address1: &str,
        ) -> Self {
            let mut employee = Employee::new(first_name, last_name);
            employee.address1 = Some(address1.to_string());
            self.employees.create(employee);
            self
        }

        pub fn with_benefits_employee(self, first_name: &str, last_name: &str) -> Self {
            let employee = Employee::new(first_name, last_name).with_benefits(vec![
                EmployeeBenefit::new(BenefitType::Health, Decimal::new(10000, 2)),
                EmployeeBenefit::new(BenefitType::Dental, Decimal::new(5000, 2)),
            ]);
            self.employees.create(employee);
            self
        }
    }
}
