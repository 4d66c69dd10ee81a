//! Size-assignment completeness per branch.
//!
//! A branch is compliant once every employee has a safety size assigned.

use serde::Serialize;

use crate::branch::Branch;
use crate::employee::Employee;
use crate::size::Size;
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchCompliance {
    pub branch_id: DbId,
    pub branch_name: String,
    pub zone: Option<String>,
    pub total_employees: u32,
    pub employees_with_size: u32,
    pub pending_employees: u32,
    /// Rounded percentage of employees with a size; 0 for an empty roster.
    pub percent: u32,
}

impl BranchCompliance {
    pub fn is_complete(&self) -> bool {
        self.total_employees > 0 && self.pending_employees == 0
    }
}

/// Rounded `part / whole` percentage, half away from zero.
fn rounded_percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) * 100.0 / f64::from(whole)).round() as u32
}

pub fn branch_compliance<'a>(
    branch: &Branch,
    employees: impl IntoIterator<Item = &'a Employee>,
) -> BranchCompliance {
    let (total, with_size) = employees.into_iter().fold((0u32, 0u32), |(total, sized), e| {
        (total + 1, sized + u32::from(e.safety_size.is_defined()))
    });

    BranchCompliance {
        branch_id: branch.id,
        branch_name: branch.name.clone(),
        zone: branch.zone.clone(),
        total_employees: total,
        employees_with_size: with_size,
        pending_employees: total - with_size,
        percent: rounded_percent(with_size, total),
    }
}

/// Branches with employees still missing sizes, least complete first.
///
/// Branches without employees are left out. When `zone` is given only
/// branches in that zone are kept.
pub fn incomplete_branches(
    reports: Vec<BranchCompliance>,
    zone: Option<&str>,
) -> Vec<BranchCompliance> {
    let mut incomplete: Vec<_> = reports
        .into_iter()
        .filter(|r| r.total_employees > 0 && r.percent < 100)
        .filter(|r| zone.map_or(true, |z| r.zone.as_deref() == Some(z)))
        .collect();
    incomplete.sort_by_key(|r| r.percent);
    incomplete
}

/// Employee count for one size across a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeShare {
    pub size: Size,
    pub count: u32,
    pub percent: u32,
}

/// Employees per safety size, every size listed including the sentinel.
pub fn size_distribution<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Vec<SizeShare> {
    let mut counts = [0u32; Size::ALL.len() + 1];
    let mut total = 0u32;
    for employee in employees {
        let slot = Size::ALL
            .iter()
            .position(|s| *s == employee.safety_size)
            .unwrap_or(Size::ALL.len());
        counts[slot] += 1;
        total += 1;
    }

    Size::ALL
        .into_iter()
        .chain(std::iter::once(Size::Undefined))
        .zip(counts)
        .map(|(size, count)| SizeShare {
            size,
            count,
            percent: rounded_percent(count, total),
        })
        .collect()
}
