//! JSON REST API for the US states reference data.
//!
//! Exposes an axum [`Router`] backed by any [`states_core::store::FunFactStore`]
//! and a shared, read-only [`Dataset`]. Transport concerns (binding, tracing
//! layers) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = states_api::api_router(AppState::new(store, dataset));
//! ```

pub mod body;
pub mod error;
pub mod funfacts;
pub mod states;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{
  Json, Router,
  http::StatusCode,
  response::IntoResponse,
  routing::get,
};
use serde_json::json;
use states_core::{Dataset, store::FunFactStore};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct AppState<S: FunFactStore> {
  pub store:   Arc<S>,
  pub dataset: Arc<Dataset>,
}

impl<S: FunFactStore> AppState<S> {
  pub fn new(store: S, dataset: Dataset) -> Self {
    Self {
      store:   Arc::new(store),
      dataset: Arc::new(dataset),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: FunFactStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/states", get(states::list::<S>))
    .route("/states/{code}", get(states::get_one::<S>))
    .route("/states/{code}/capital", get(states::capital::<S>))
    .route("/states/{code}/nickname", get(states::nickname::<S>))
    .route("/states/{code}/population", get(states::population::<S>))
    .route("/states/{code}/admission", get(states::admission::<S>))
    .route(
      "/states/{code}/funfact",
      get(funfacts::random::<S>)
        .post(funfacts::create::<S>)
        .patch(funfacts::patch::<S>)
        .delete(funfacts::delete::<S>),
    )
    .fallback(not_found)
    .with_state(state)
}

async fn not_found() -> impl IntoResponse {
  (StatusCode::NOT_FOUND, Json(json!({ "error": "404 Not Found" })))
}
