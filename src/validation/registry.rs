use std::any::{type_name, Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{ErrorReport, ValidationContext, Validator};
use crate::error::{Result, RosterError};

/// Maps a payload type to its validator.
///
/// Resolution is by exact type; there is no supertype matching and no
/// fallback. The registry is populated once at startup and read-only
/// afterwards, so endpoint code never has to know which validator applies
/// to the payload it is holding.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the validator for `T`. A second registration for the same
    /// payload type is rejected as a configuration error rather than
    /// silently shadowing the first.
    pub fn register<T: 'static>(&mut self, validator: Validator<T>) -> Result<()> {
        match self.validators.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => Err(RosterError::Config(format!(
                "validator already registered for {}",
                type_name::<T>()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Box::new(validator));
                Ok(())
            }
        }
    }

    pub fn resolve<T: 'static>(&self) -> Option<&Validator<T>> {
        self.validators.get(&TypeId::of::<T>())?.downcast_ref()
    }

    /// Pipeline entry point. Payload types without a registered validator
    /// pass with an empty report.
    pub fn validate<T: 'static>(&self, payload: &T, ctx: &ValidationContext<'_>) -> ErrorReport {
        match self.resolve::<T>() {
            Some(validator) => validator.validate(payload, ctx),
            None => ErrorReport::default(),
        }
    }
}
