//! # Validation Pipeline
//!
//! Every inbound payload runs through the same machinery: the registry
//! resolves the validator bound to the payload's type, the validator runs
//! its field rules in declaration order, and failures accumulate into an
//! [`ErrorReport`]. No rule short-circuits another, so one payload can
//! surface several distinct field failures in a single report.
//!
//! Rules come in two flavors:
//!
//! - **Pure** rules look only at the payload ([`Rule::not_empty`]).
//! - **Context-dependent** rules additionally read previously stored state
//!   through the [`ValidationContext`] before deciding, e.g. "this field
//!   may not become empty once the stored record has a value for it".
//!
//! The context carries the target record's identity as an explicit value
//! supplied by the caller, never fished out of ambient request state, which
//! keeps every validator independently testable. Context rules only read
//! from the store; nothing in this module writes.

pub mod employee;
pub mod registry;
pub mod report;

pub use registry::ValidatorRegistry;
pub use report::ErrorReport;

use crate::model::Employee;
use crate::store::{RecordId, Repository};

/// Read-only state handed to rules that must consult the record store.
pub struct ValidationContext<'a> {
    record_id: Option<RecordId>,
    employees: &'a dyn Repository<Employee>,
}

impl<'a> ValidationContext<'a> {
    /// Context for operations that target no existing record (creation).
    pub fn new(employees: &'a dyn Repository<Employee>) -> Self {
        Self {
            record_id: None,
            employees,
        }
    }

    /// Context for operations addressed at an existing record's identity,
    /// e.g. an update with the identity taken from the request path.
    pub fn for_record(employees: &'a dyn Repository<Employee>, id: RecordId) -> Self {
        Self {
            record_id: Some(id),
            employees,
        }
    }

    pub fn record_id(&self) -> Option<RecordId> {
        self.record_id
    }

    /// The stored record the request targets, when it exists. Rules that
    /// predicate on "already set" treat an absent record as the premise
    /// being unsatisfiable, not as a failure.
    pub fn stored_employee(&self) -> Option<Employee> {
        self.record_id.and_then(|id| self.employees.get_by_id(id))
    }
}

type Check<T> = Box<dyn Fn(&T, &ValidationContext<'_>) -> bool + Send + Sync>;

/// A single pass/fail predicate over one payload field.
pub struct Rule<T> {
    field: &'static str,
    message: String,
    check: Check<T>,
}

impl<T: 'static> Rule<T> {
    /// A rule with a custom message. The check returns `true` when the
    /// payload passes.
    pub fn must(
        field: &'static str,
        message: impl Into<String>,
        check: impl Fn(&T, &ValidationContext<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            message: message.into(),
            check: Box::new(check),
        }
    }

    /// Standard required-field rule with the stock message, e.g.
    /// `'First Name' must not be empty.` Whitespace-only values count as
    /// empty.
    pub fn not_empty(field: &'static str, value: fn(&T) -> Option<&str>) -> Self {
        let message = format!("'{}' must not be empty.", field_label(field));
        Self::must(field, message, move |payload, _ctx| {
            value(payload).is_some_and(|v| !v.trim().is_empty())
        })
    }

}

/// Ordered list of field rules bound to exactly one payload type.
pub struct Validator<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Validator<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Runs every rule in declaration order, accumulating failures.
    pub fn validate(&self, payload: &T, ctx: &ValidationContext<'_>) -> ErrorReport {
        let mut report = ErrorReport::default();
        for rule in &self.rules {
            if !(rule.check)(payload, ctx) {
                report.add(rule.field, rule.message.clone());
            }
        }
        report
    }
}

/// Splits a PascalCase payload field name into the label used in stock
/// messages: `FirstName` -> `First Name`. Digits stay attached to their
/// word, so `Address1` stays `Address1`.
fn field_label(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 4);
    for (i, ch) in field.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            label.push(' ');
        }
        label.push(ch);
    }
    label
}
