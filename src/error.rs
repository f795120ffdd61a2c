use thiserror::Error;

use crate::validation::report::ErrorReport;

#[derive(Error, Debug)]
pub enum RosterError {
    /// One or more field rules rejected a payload. Carries the full report;
    /// the caller decides how to render it.
    #[error("validation failed: {0}")]
    Validation(ErrorReport),

    /// Startup-time wiring mistake, e.g. registering two validators for the
    /// same payload type. Never a runtime/user-facing condition.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RosterError {
    /// The field report, when this is a validation failure.
    pub fn report(&self) -> Option<&ErrorReport> {
        match self {
            RosterError::Validation(report) => Some(report),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
