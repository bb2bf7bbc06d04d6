//! Schedules written row by row.
//!
//! Each row is one employee's days as single-character shift ids, e.g.
//! `"DDDDDOO"`. Whitespace is ignored so rows can be grouped by week.

use shiftforge_core::{Catalog, Schedule};

/// Builds a schedule from one id string per employee.
///
/// # Panics
///
/// Panics on unknown ids or a shape that does not match the catalog.
pub fn schedule_from_rows<S: AsRef<str>>(catalog: &Catalog, rows: &[S]) -> Schedule {
    let cells = rows
        .iter()
        .flat_map(|row| {
            row.as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    catalog
                        .shift_by_id(&c.to_string())
                        .unwrap_or_else(|e| panic!("{}", e))
                        .index()
                })
                .collect::<Vec<_>>()
        })
        .collect();
    Schedule::from_flat(catalog, cells).unwrap_or_else(|e| panic!("{}", e))
}
