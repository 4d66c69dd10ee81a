//! Groups a flat employee snapshot by owning branch.
//!
//! Records without a branch id cannot be attributed to any shipment. They
//! are skipped and counted so data-quality problems show up in the run
//! result instead of as silently missing garments.

use std::collections::BTreeMap;

use crate::employee::Employee;
use crate::types::DbId;

/// Employees indexed by branch, preserving input order within each branch.
#[derive(Debug, Default)]
pub struct Roster<'a> {
    by_branch: BTreeMap<DbId, Vec<&'a Employee>>,
    skipped_malformed: usize,
}

impl<'a> Roster<'a> {
    pub fn from_employees(employees: &'a [Employee]) -> Self {
        let mut roster = Roster::default();
        for employee in employees {
            match employee.branch_id {
                Some(branch_id) => roster.by_branch.entry(branch_id).or_default().push(employee),
                None => roster.skipped_malformed += 1,
            }
        }
        roster
    }

    /// Employees of `branch_id`; empty when the branch has none.
    pub fn employees_of(&self, branch_id: DbId) -> &[&'a Employee] {
        self.by_branch
            .get(&branch_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of records dropped for lacking a branch id.
    pub fn skipped_malformed(&self) -> usize {
        self.skipped_malformed
    }
}
