//! # Domain Model: Employees and Benefits
//!
//! This module defines the stored shapes: [`Employee`], its owned
//! [`EmployeeBenefit`] line items, and the closed [`BenefitType`] set.
//!
//! ## Identity
//!
//! Records enter the store with `id = 0` (unassigned). The store hands out
//! the real identity on `create`, and [`Keyed::assign_id`] is the single
//! place that anchors a record to it. For an employee that also re-anchors
//! the benefit collection: each benefit gets `employee_id` stamped with the
//! owner's new identity, and any benefit still at `id = 0` is numbered by
//! its position (1-based) within the collection.
//!
//! ## What the model does NOT do
//!
//! No business validation lives here. "First name must not be empty" and
//! friends are the validation pipeline's job; the model and the store accept
//! whatever they are given.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::{Keyed, RecordId};

/// Closed set of benefit categories an employee can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenefitType {
    Health,
    Dental,
    Vision,
}

/// A benefit line item owned by exactly one employee.
///
/// `id` is unique within the owning employee's collection, not globally.
/// `cost` is a non-negative monetary amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeBenefit {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub benefit_type: BenefitType,
    pub cost: Decimal,
}

impl EmployeeBenefit {
    /// A benefit not yet anchored to an employee; identity fields are filled
    /// in when the owning record's identity is assigned.
    pub fn new(benefit_type: BenefitType, cost: Decimal) -> Self {
        Self {
            id: 0,
            employee_id: 0,
            benefit_type,
            cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub social_security_number: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub benefits: Vec<EmployeeBenefit>,
}

impl Employee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            social_security_number: None,
            address1: None,
            address2: None,
            city: None,
            state: None,
            zip_code: None,
            phone_number: None,
            email: None,
            benefits: Vec::new(),
        }
    }

    pub fn with_benefits(mut self, benefits: Vec<EmployeeBenefit>) -> Self {
        self.benefits = benefits;
        self
    }
}

impl Keyed for Employee {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
        for (slot, benefit) in self.benefits.iter_mut().enumerate() {
            benefit.employee_id = id;
            if benefit.id == 0 {
                benefit.id = slot as RecordId + 1;
            }
        }
    }
}
