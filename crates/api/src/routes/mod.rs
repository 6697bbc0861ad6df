//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod auth;
pub mod health;
pub mod transactions;
pub mod wallet;

/// Creates the API router, wiring protected routes through the auth
/// middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Wallet routes require a verified session token. The sale-completion
    // route stays public: it stands in for a webhook from the external
    // escrow provider.
    let protected_routes = Router::new()
        .merge(wallet::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(transactions::routes())
        .merge(protected_routes)
}
