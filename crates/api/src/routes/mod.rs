pub mod health;
pub mod reports;
pub mod shipping;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /shipping/labels                 generate paginated labels (POST)
/// /shipping/preview                selection counts and projected pages (POST)
///
/// /reports/sizes                   garment summary per branch (POST)
/// /reports/compliance              incomplete branches and size distribution (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/shipping", shipping::router())
        .nest("/reports", reports::router())
}
