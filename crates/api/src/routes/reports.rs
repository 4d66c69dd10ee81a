//! Route definitions for size and compliance reports.

use axum::routing::post;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes mounted at `/reports`.
///
/// ```text
/// POST /sizes             -> size_summaries
/// POST /compliance        -> compliance_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sizes", post(reports::size_summaries))
        .route("/compliance", post(reports::compliance_report))
}
