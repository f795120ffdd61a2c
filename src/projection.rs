//! # Record-to-Response Projection
//!
//! The single code path from stored shapes to externally visible ones.
//! Single-record reads, list reads, and the benefits read all project
//! through here, so a record always renders the same regardless of which
//! path returned it.
//!
//! The response copies every contact scalar verbatim and restructures the
//! benefit collection in its original order. The social security number is
//! stored but never projected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{BenefitType, Employee, EmployeeBenefit};
use crate::store::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeResponse {
    pub first_name: String,
    pub last_name: String,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub benefits: Vec<EmployeeBenefitResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeBenefitResponse {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub benefit_type: BenefitType,
    pub cost: Decimal,
}

pub fn employee_to_response(employee: &Employee) -> EmployeeResponse {
    EmployeeResponse {
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        address1: employee.address1.clone(),
        address2: employee.address2.clone(),
        city: employee.city.clone(),
        state: employee.state.clone(),
        zip_code: employee.zip_code.clone(),
        phone_number: employee.phone_number.clone(),
        email: employee.email.clone(),
        benefits: employee.benefits.iter().map(benefit_to_response).collect(),
    }
}

pub fn benefit_to_response(benefit: &EmployeeBenefit) -> EmployeeBenefitResponse {
    EmployeeBenefitResponse {
        id: benefit.id,
        employee_id: benefit.employee_id,
        benefit_type: benefit.benefit_type,
        cost: benefit.cost,
    }
}
