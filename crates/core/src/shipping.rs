//! Shipping-label generation pipeline.
//!
//! `select branches -> group roster -> summarize -> plan boxes -> layout`.
//! The whole run is a pure function of the branch/employee snapshot and the
//! configuration, so generating twice from the same snapshot produces the
//! same slots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::box_planner::{self, ShipmentBox, DEFAULT_BOX_CAPACITY};
use crate::branch::Branch;
use crate::branch_selector::{count_by_mode, BranchFilter, ModeCounts};
use crate::employee::Employee;
use crate::error::CoreError;
use crate::label_content::{LabelContent, SenderInfo};
use crate::label_layout::{self, LabelGrid, LabelSlot};
use crate::roster::Roster;
use crate::size_ledger::{self, GarmentSummary};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Parameters of one label run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingConfig {
    pub capacity_per_box: u32,
    pub grid: LabelGrid,
    #[serde(default)]
    pub filter: BranchFilter,
    #[serde(default)]
    pub sender: SenderInfo,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            capacity_per_box: DEFAULT_BOX_CAPACITY,
            grid: LabelGrid::default(),
            filter: BranchFilter::default(),
            sender: SenderInfo::default(),
        }
    }
}

impl ShippingConfig {
    /// Reject non-positive capacity or grid dimensions before any work.
    pub fn validate(&self) -> Result<(), CoreError> {
        box_planner::validate_capacity(self.capacity_per_box)?;
        self.grid.validate()
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// What one label carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPayload {
    pub branch: Branch,
    pub shipment_box: ShipmentBox,
    pub content: LabelContent,
}

/// Per-branch outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchPlan {
    pub branch_id: DbId,
    pub branch_name: String,
    pub summary: GarmentSummary,
    pub box_count: u32,
}

/// A complete, paginated label run.
///
/// An empty selection yields zero slots and zero pages; reporting "nothing to
/// generate" is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelRun {
    pub slots: Vec<LabelSlot<LabelPayload>>,
    pub page_count: u32,
    pub branch_count: usize,
    pub box_count: usize,
    /// Employee records dropped for lacking a branch id.
    pub skipped_employees: usize,
    pub branch_plans: Vec<BranchPlan>,
}

impl LabelRun {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Projection shown before generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionPreview {
    pub mode_counts: ModeCounts,
    pub selected_branches: usize,
    pub box_count: usize,
    pub page_count: u32,
    pub slots_per_page: u32,
    pub skipped_employees: usize,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

struct Planned<'a> {
    branch: &'a Branch,
    summary: GarmentSummary,
    boxes: Vec<ShipmentBox>,
}

fn plan_selection<'a>(
    branches: &'a [Branch],
    roster: &Roster<'_>,
    config: &ShippingConfig,
) -> Result<Vec<Planned<'a>>, CoreError> {
    config
        .filter
        .apply(branches)
        .into_iter()
        .map(|branch| {
            let summary = size_ledger::summarize(roster.employees_of(branch.id).iter().copied());
            let boxes = box_planner::plan_boxes(branch.id, &summary, config.capacity_per_box)?;
            tracing::debug!(
                branch_id = branch.id,
                safety_total = summary.safety_garment_total,
                admin_total = summary.admin_garment_total,
                boxes = boxes.len(),
                "Planned branch shipment",
            );
            Ok(Planned {
                branch,
                summary,
                boxes,
            })
        })
        .collect()
}

fn warn_skipped(skipped: usize) {
    if skipped > 0 {
        tracing::warn!(
            skipped,
            "Skipped employee records without a branch id"
        );
    }
}

/// Generate the label run for a snapshot of branches and employees.
pub fn generate_labels(
    branches: &[Branch],
    employees: &[Employee],
    config: &ShippingConfig,
) -> Result<LabelRun, CoreError> {
    config.validate()?;

    let roster = Roster::from_employees(employees);
    warn_skipped(roster.skipped_malformed());

    let planned = plan_selection(branches, &roster, config)?;

    let branch_plans = planned
        .iter()
        .map(|p| BranchPlan {
            branch_id: p.branch.id,
            branch_name: p.branch.name.clone(),
            summary: p.summary.clone(),
            box_count: p.boxes.len() as u32,
        })
        .collect();

    let items: Vec<LabelPayload> = planned
        .iter()
        .flat_map(|p| {
            p.boxes.iter().map(move |shipment_box| LabelPayload {
                branch: p.branch.clone(),
                shipment_box: *shipment_box,
                content: LabelContent::build(p.branch, &p.summary, shipment_box, &config.sender),
            })
        })
        .collect();

    let box_count = items.len();
    let page_count = label_layout::page_count(box_count, &config.grid)?;
    let slots = label_layout::layout(items, &config.grid)?;

    tracing::info!(
        mode = %config.filter.mode,
        branches = planned.len(),
        boxes = box_count,
        pages = page_count,
        "Generated shipping labels",
    );

    Ok(LabelRun {
        slots,
        page_count,
        branch_count: planned.len(),
        box_count,
        skipped_employees: roster.skipped_malformed(),
        branch_plans,
    })
}

/// Count what [`generate_labels`] would produce without building labels.
pub fn preview(
    branches: &[Branch],
    employees: &[Employee],
    config: &ShippingConfig,
) -> Result<SelectionPreview, CoreError> {
    config.validate()?;

    let roster = Roster::from_employees(employees);
    let planned = plan_selection(branches, &roster, config)?;
    let box_count = planned.iter().map(|p| p.boxes.len()).sum();

    Ok(SelectionPreview {
        mode_counts: count_by_mode(branches),
        selected_branches: planned.len(),
        box_count,
        page_count: label_layout::page_count(box_count, &config.grid)?,
        slots_per_page: config.grid.slots_per_page(),
        skipped_employees: roster.skipped_malformed(),
    })
}

/// File name for the printable label document of a given day.
pub fn document_file_name(date: NaiveDate) -> String {
    format!("shipping_labels_{}.pdf", date.format("%Y-%m-%d"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
