//! Read-only queries over the in-memory teacher list.
//!
//! Every function returns a fresh list in the original order.

use crate::error::{RegistryError, Result};
use crate::record::Teacher;

pub fn filter_by_age(records: &[Teacher], age: i32) -> Vec<Teacher> {
    records.iter().filter(|t| t.age == age).cloned().collect()
}

pub fn filter_by_classes(records: &[Teacher], count: i32) -> Vec<Teacher> {
    records
        .iter()
        .filter(|t| t.num_classes == count)
        .cloned()
        .collect()
}

/// Case-insensitive substring search on name. Empty `text` returns everything.
pub fn search(records: &[Teacher], text: &str) -> Vec<Teacher> {
    records
        .iter()
        .filter(|t| t.name_matches(text))
        .cloned()
        .collect()
}

/// Index of the first teacher whose name contains `text`, in file order.
pub fn find_first(records: &[Teacher], text: &str) -> Option<usize> {
    records.iter().position(|t| t.name_matches(text))
}

/// Mean of `num_classes` across all records.
pub fn average_classes(records: &[Teacher]) -> Result<f64> {
    if records.is_empty() {
        return Err(RegistryError::Empty);
    }
    let total: i64 = records.iter().map(|t| i64::from(t.num_classes)).sum();
    Ok(total as f64 / records.len() as f64)
}
