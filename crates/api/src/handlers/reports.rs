//! Handlers for size and compliance reports.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uniformes_core::compliance::{self, BranchCompliance, SizeShare};
use uniformes_core::roster::Roster;
use uniformes_core::size_ledger::{self, GarmentSummary};
use uniformes_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::snapshot::SnapshotRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BranchSizes {
    pub branch_id: DbId,
    pub branch_name: String,
    pub summary: GarmentSummary,
}

#[derive(Debug, Serialize)]
pub struct SizeReport {
    pub branches: Vec<BranchSizes>,
    pub skipped_employees: usize,
}

#[derive(Debug, Serialize)]
pub struct ComplianceReport {
    pub incomplete_branches: Vec<BranchCompliance>,
    pub size_distribution: Vec<SizeShare>,
    pub skipped_employees: usize,
}

// ---------------------------------------------------------------------------
// POST /reports/sizes
// ---------------------------------------------------------------------------

/// Garment summary for each branch matching the filter.
pub async fn size_summaries(
    State(state): State<AppState>,
    Json(body): Json<SnapshotRequest>,
) -> AppResult<impl IntoResponse> {
    let config = body.shipping_config(&state.config.shipping)?;
    let roster = Roster::from_employees(&body.employees);

    let branches = config
        .filter
        .apply(&body.branches)
        .into_iter()
        .map(|branch| BranchSizes {
            branch_id: branch.id,
            branch_name: branch.name.clone(),
            summary: size_ledger::summarize(roster.employees_of(branch.id).iter().copied()),
        })
        .collect();

    Ok(Json(DataResponse {
        data: SizeReport {
            branches,
            skipped_employees: roster.skipped_malformed(),
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /reports/compliance
// ---------------------------------------------------------------------------

/// Branches with unsized employees, least complete first, plus the
/// roster-wide size distribution.
pub async fn compliance_report(
    State(state): State<AppState>,
    Json(body): Json<SnapshotRequest>,
) -> AppResult<impl IntoResponse> {
    let config = body.shipping_config(&state.config.shipping)?;
    let roster = Roster::from_employees(&body.employees);

    let reports = body
        .branches
        .iter()
        .map(|branch| {
            compliance::branch_compliance(branch, roster.employees_of(branch.id).iter().copied())
        })
        .collect();

    let incomplete = compliance::incomplete_branches(reports, config.filter.zone.as_deref());
    tracing::debug!(incomplete = incomplete.len(), "Computed compliance report");

    Ok(Json(DataResponse {
        data: ComplianceReport {
            incomplete_branches: incomplete,
            size_distribution: compliance::size_distribution(&body.employees),
            skipped_employees: roster.skipped_malformed(),
        },
    }))
}
