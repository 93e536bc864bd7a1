//! Handlers for `/states/:code/funfact`.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/states/:code/funfact` | One fact at random; 404 if none |
//! | `POST`   | `/states/:code/funfact` | Body: `{"funfacts": [..]}`; appends, returns 201 + record |
//! | `PATCH`  | `/states/:code/funfact` | Body: `{"index": n, "funfact": ".."}`; 1-based |
//! | `DELETE` | `/states/:code/funfact` | Body: `{"index": n}`; 1-based |
//!
//! The state code is validated before the body is looked at.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use states_core::{editor, funfact::FunFactRecord, query, store::FunFactStore};

use crate::{
  AppState,
  body::{CreateBody, DeleteBody, PatchBody},
  error::ApiError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunFactView {
  pub funfact: String,
}

/// `GET /states/:code/funfact`
pub async fn random<S: FunFactStore>(
  State(app): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<FunFactView>, ApiError> {
  let state = app.dataset.validate(&code)?;
  let funfact = query::random_funfact(app.store.as_ref(), state).await?;
  Ok(Json(FunFactView { funfact }))
}

/// `POST /states/:code/funfact`: returns 201 + the stored record.
pub async fn create<S: FunFactStore>(
  State(app): State<AppState<S>>,
  Path(code): Path<String>,
  raw: Bytes,
) -> Result<impl IntoResponse, ApiError> {
  let state = app.dataset.validate(&code)?;
  let body = CreateBody::parse(&raw)?;
  let record = editor::create_funfacts(app.store.as_ref(), state, body.funfacts).await?;
  Ok((StatusCode::CREATED, Json(record)))
}

/// `PATCH /states/:code/funfact`
pub async fn patch<S: FunFactStore>(
  State(app): State<AppState<S>>,
  Path(code): Path<String>,
  raw: Bytes,
) -> Result<Json<FunFactRecord>, ApiError> {
  let state = app.dataset.validate(&code)?;
  let body = PatchBody::parse(&raw)?;
  let record =
    editor::patch_funfact(app.store.as_ref(), state, body.index, body.funfact).await?;
  Ok(Json(record))
}

/// `DELETE /states/:code/funfact`
pub async fn delete<S: FunFactStore>(
  State(app): State<AppState<S>>,
  Path(code): Path<String>,
  raw: Bytes,
) -> Result<Json<FunFactRecord>, ApiError> {
  let state = app.dataset.validate(&code)?;
  let body = DeleteBody::parse(&raw)?;
  let record = editor::delete_funfact(app.store.as_ref(), state, body.index).await?;
  Ok(Json(record))
}
