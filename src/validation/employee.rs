//! The employee payload validators.
//!
//! Report keys are the payload field names as they appear on the wire
//! (`FirstName`, `Address1`), not translated labels.

use super::{Rule, Validator, ValidatorRegistry};
use crate::commands::create::CreateEmployeeRequest;
use crate::commands::update::UpdateEmployeeRequest;
use crate::error::Result;

/// Ruleset for employee creation: both name fields are required.
pub fn create_employee_validator() -> Validator<CreateEmployeeRequest> {
    Validator::new()
        .rule(Rule::not_empty("FirstName", |r: &CreateEmployeeRequest| {
            r.first_name.as_deref()
        }))
        .rule(Rule::not_empty("LastName", |r: &CreateEmployeeRequest| {
            r.last_name.as_deref()
        }))
}

/// Ruleset for employee updates.
///
/// Address1 may be omitted on a record that never had one, but once the
/// stored record carries a value it cannot be blanked out again. When the
/// addressed record does not exist the rule passes vacuously; absence is
/// the update command's concern, not the validator's.
pub fn update_employee_validator() -> Validator<UpdateEmployeeRequest> {
    Validator::new().rule(Rule::must(
        "Address1",
        "Address1 must not be empty",
        |request: &UpdateEmployeeRequest, ctx| match ctx.stored_employee() {
            Some(stored) if stored.address1.is_some() => request
                .address1
                .as_deref()
                .is_some_and(|a| !a.trim().is_empty()),
            _ => true,
        },
    ))
}

/// Installs every employee validator into the registry.
pub fn register_employee_validators(registry: &mut ValidatorRegistry) -> Result<()> {
    registry.register(create_employee_validator())?;
    registry.register(update_employee_validator())?;
    Ok(())
}
