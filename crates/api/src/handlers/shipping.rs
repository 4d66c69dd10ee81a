//! Handlers for shipping-label generation.
//!
//! Both endpoints run the pure pipeline from `uniformes_core::shipping` on
//! the posted snapshot; nothing is stored between calls.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uniformes_core::shipping::{self, LabelRun};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::snapshot::SnapshotRequest;
use crate::state::AppState;

/// Generated label document metadata plus the laid-out run.
#[derive(Debug, Serialize)]
pub struct LabelDocument {
    pub file_name: String,
    pub generated_at: DateTime<Utc>,
    /// Set when the selection matched no branches.
    pub nothing_to_generate: bool,
    #[serde(flatten)]
    pub run: LabelRun,
}

// ---------------------------------------------------------------------------
// POST /shipping/labels
// ---------------------------------------------------------------------------

/// Lay out one label per shipment box for the selected branches.
pub async fn generate_labels(
    State(state): State<AppState>,
    Json(body): Json<SnapshotRequest>,
) -> AppResult<impl IntoResponse> {
    let config = body.shipping_config(&state.config.shipping)?;
    let run = shipping::generate_labels(&body.branches, &body.employees, &config)?;

    if run.is_empty() {
        tracing::info!(mode = %config.filter.mode, "No branches selected for label generation");
    }

    let generated_at = Utc::now();
    let document = LabelDocument {
        file_name: shipping::document_file_name(generated_at.date_naive()),
        generated_at,
        nothing_to_generate: run.is_empty(),
        run,
    };

    Ok(Json(DataResponse { data: document }))
}

// ---------------------------------------------------------------------------
// POST /shipping/preview
// ---------------------------------------------------------------------------

/// Counts shown on the selection screen before generating.
pub async fn preview_labels(
    State(state): State<AppState>,
    Json(body): Json<SnapshotRequest>,
) -> AppResult<impl IntoResponse> {
    let config = body.shipping_config(&state.config.shipping)?;
    let preview = shipping::preview(&body.branches, &body.employees, &config)?;
    Ok(Json(DataResponse { data: preview }))
}
