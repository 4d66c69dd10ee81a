//! Per-branch garment tallies derived from the employee roster.
//!
//! Every employee receives safety garments; administrative employees receive
//! fewer safety garments plus an administrative set (2 polos and 1 shirt).
//! The summary is a pure function of the roster and is recomputed on every
//! generation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::employee::Employee;
use crate::size::Size;

// ---------------------------------------------------------------------------
// Allotments
// ---------------------------------------------------------------------------

/// Safety garments issued to a non-administrative employee.
pub const SAFETY_UNITS_STANDARD: u32 = 3;
/// Safety garments issued to an administrative employee.
pub const SAFETY_UNITS_ADMIN: u32 = 1;
/// Polos in one administrative set.
pub const ADMIN_POLOS_PER_SET: u32 = 2;
/// Shirts in one administrative set.
pub const ADMIN_SHIRTS_PER_SET: u32 = 1;
/// Administrative units per set, the figure used for billing and packing.
pub const ADMIN_UNITS_PER_SET: u32 = ADMIN_POLOS_PER_SET + ADMIN_SHIRTS_PER_SET;

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Garment quantities needed by one branch.
///
/// The `*_by_size` maps only contain sizes with a non-zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GarmentSummary {
    pub employee_count: u32,
    pub safety_garment_total: u32,
    pub safety_garment_by_size: BTreeMap<Size, u32>,
    pub admin_garment_total: u32,
    pub admin_garment_by_size: BTreeMap<Size, u32>,
    pub polo_count: u32,
    pub shirt_count: u32,
}

impl GarmentSummary {
    /// Safety sizes as `"M:3 L:1"`, smallest size first.
    pub fn safety_sizes_line(&self) -> String {
        sizes_line(&self.safety_garment_by_size)
    }

    /// Administrative sizes as `"S:3 XL:6"`, smallest size first.
    pub fn admin_sizes_line(&self) -> String {
        sizes_line(&self.admin_garment_by_size)
    }

    fn add_safety(&mut self, size: Size, units: u32) {
        self.safety_garment_total += units;
        *self.safety_garment_by_size.entry(size).or_default() += units;
    }

    fn add_admin_set(&mut self, size: Size) {
        self.admin_garment_total += ADMIN_UNITS_PER_SET;
        self.polo_count += ADMIN_POLOS_PER_SET;
        self.shirt_count += ADMIN_SHIRTS_PER_SET;
        *self.admin_garment_by_size.entry(size).or_default() += ADMIN_UNITS_PER_SET;
    }
}

fn sizes_line(by_size: &BTreeMap<Size, u32>) -> String {
    by_size
        .iter()
        .map(|(size, count)| format!("{size}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tally the garments needed for a roster.
///
/// An employee whose relevant size is [`Size::Undefined`] contributes nothing
/// to that garment's tally. Duplicate records are counted as given.
pub fn summarize<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> GarmentSummary {
    let mut summary = GarmentSummary::default();

    for employee in employees {
        summary.employee_count += 1;

        let safety_units = if employee.requires_admin_garment {
            SAFETY_UNITS_ADMIN
        } else {
            SAFETY_UNITS_STANDARD
        };
        if employee.safety_size.is_defined() {
            summary.add_safety(employee.safety_size, safety_units);
        }

        if employee.requires_admin_garment && employee.admin_size.is_defined() {
            summary.add_admin_set(employee.admin_size);
        }
    }

    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
