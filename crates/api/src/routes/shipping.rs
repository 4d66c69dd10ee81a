//! Route definitions for shipping-label generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::shipping;
use crate::state::AppState;

/// Shipping routes mounted at `/shipping`.
///
/// ```text
/// POST /labels            -> generate_labels
/// POST /preview           -> preview_labels
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/labels", post(shipping::generate_labels))
        .route("/preview", post(shipping::preview_labels))
}
