//! Request body shared by the shipping and report endpoints.
//!
//! The caller posts the branch/employee snapshot it already holds; the
//! service never loads or stores records itself.

use serde::Deserialize;
use uniformes_core::branch::Branch;
use uniformes_core::branch_selector::{BranchFilter, BranchFilterMode};
use uniformes_core::employee::Employee;
use uniformes_core::label_layout::LabelGrid;
use uniformes_core::shipping::ShippingConfig;
use validator::Validate;

use crate::error::AppResult;

/// A snapshot of branches and employees plus optional per-request overrides.
#[derive(Debug, Deserialize, Validate)]
pub struct SnapshotRequest {
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub filter: BranchFilterMode,
    #[serde(default)]
    pub zone: Option<String>,
    #[validate(range(min = 1, max = 10000))]
    pub capacity_per_box: Option<i64>,
    #[validate(range(min = 1, max = 100))]
    pub slots_per_row: Option<i64>,
    #[validate(range(min = 1, max = 100))]
    pub slots_per_column: Option<i64>,
}

/// Bounds are checked by `validate()` before this runs, so the cast is lossless.
fn override_or(value: Option<i64>, default: u32) -> u32 {
    value.map_or(default, |v| v as u32)
}

impl SnapshotRequest {
    /// Validate the overrides and merge them over the server defaults.
    pub fn shipping_config(&self, defaults: &ShippingConfig) -> AppResult<ShippingConfig> {
        self.validate()?;

        let capacity_per_box = override_or(self.capacity_per_box, defaults.capacity_per_box);
        let slots_per_row = override_or(self.slots_per_row, defaults.grid.slots_per_row);
        let slots_per_column = override_or(self.slots_per_column, defaults.grid.slots_per_column);

        let zone = self
            .zone
            .as_deref()
            .map(str::trim)
            .filter(|z| !z.is_empty())
            .map(str::to_string);

        Ok(ShippingConfig {
            capacity_per_box,
            grid: LabelGrid::new(slots_per_row, slots_per_column)?,
            filter: BranchFilter {
                mode: self.filter,
                zone,
            },
            sender: defaults.sender.clone(),
        })
    }
}
