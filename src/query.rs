//! # List Pipeline
//!
//! Narrows the store's enumeration for list reads: predicate filters, then
//! an offset paging window. Filtering runs before paging so a filtered page
//! is drawn from the full match set, and the window indexes into matches
//! rather than raw storage positions.
//!
//! Filters are case-sensitive substring matches, ANDed when several are
//! present. Absent or blank filter values are ignored entirely, never
//! treated as "match the empty string". Zero matches is an empty sequence,
//! not an error.

use serde::Deserialize;

use crate::model::Employee;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_RECORDS_PER_PAGE: usize = 100;

/// Optional list parameters as supplied by the transport. Missing paging
/// values fall back to page 1 with 100 records per page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListEmployeesRequest {
    pub page: Option<usize>,
    pub records_per_page: Option<usize>,
    pub first_name_contains: Option<String>,
    pub last_name_contains: Option<String>,
}

/// Applies filters and the paging window over records already in insertion
/// order.
pub fn apply(request: &ListEmployeesRequest, employees: Vec<Employee>) -> Vec<Employee> {
    let page = request.page.unwrap_or(DEFAULT_PAGE).max(1);
    let per_page = request.records_per_page.unwrap_or(DEFAULT_RECORDS_PER_PAGE);

    employees
        .into_iter()
        .filter(|employee| matches_filters(employee, request))
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect()
}

fn matches_filters(employee: &Employee, request: &ListEmployeesRequest) -> bool {
    contains(&employee.first_name, request.first_name_contains.as_deref())
        && contains(&employee.last_name, request.last_name_contains.as_deref())
}

fn contains(value: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(f) if !f.trim().is_empty() => value.contains(f),
        _ => true,
    }
}
