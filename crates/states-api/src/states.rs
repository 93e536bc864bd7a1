//! Handlers for the read-only `/states` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/states` | Optional `?contig=true\|false` |
//! | `GET`  | `/states/:code` | Merged state; 400 on an unknown code |
//! | `GET`  | `/states/:code/capital` | `{state, capital}` |
//! | `GET`  | `/states/:code/nickname` | `{state, nickname}` |
//! | `GET`  | `/states/:code/population` | `{state, population}`, comma-grouped |
//! | `GET`  | `/states/:code/admission` | `{state, admitted}` |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use states_core::{
  ContigFilter, query,
  state::StateView,
  store::FunFactStore,
};

use crate::{AppState, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// `true` for the lower 48, `false` for Alaska and Hawaii.
  pub contig: Option<String>,
}

/// `GET /states[?contig=true|false]`
pub async fn list<S: FunFactStore>(
  State(app): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Json<Vec<StateView>> {
  let filter = ContigFilter::from_param(params.contig.as_deref());
  Json(query::list_states(app.store.as_ref(), &app.dataset, filter).await)
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /states/:code`
pub async fn get_one<S: FunFactStore>(
  State(app): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<StateView>, ApiError> {
  let state = app.dataset.validate(&code)?;
  let view = query::get_state(app.store.as_ref(), state).await?;
  Ok(Json(view))
}

// ─── Single fields ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalView {
  pub state:   String,
  pub capital: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicknameView {
  pub state:    String,
  pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationView {
  pub state:      String,
  /// Formatted with thousands separators, e.g. `"2,937,880"`.
  pub population: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionView {
  pub state:    String,
  pub admitted: NaiveDate,
}

/// `GET /states/:code/capital`
pub async fn capital<S: FunFactStore>(
  State(app): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<CapitalView>, ApiError> {
  let state = app.dataset.validate(&code)?;
  Ok(Json(CapitalView {
    state:   state.name.clone(),
    capital: state.capital_city.clone(),
  }))
}

/// `GET /states/:code/nickname`
pub async fn nickname<S: FunFactStore>(
  State(app): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<NicknameView>, ApiError> {
  let state = app.dataset.validate(&code)?;
  Ok(Json(NicknameView {
    state:    state.name.clone(),
    nickname: state.nickname.clone(),
  }))
}

/// `GET /states/:code/population`
pub async fn population<S: FunFactStore>(
  State(app): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<PopulationView>, ApiError> {
  let state = app.dataset.validate(&code)?;
  Ok(Json(PopulationView {
    state:      state.name.clone(),
    population: state.population_display(),
  }))
}

/// `GET /states/:code/admission`
pub async fn admission<S: FunFactStore>(
  State(app): State<AppState<S>>,
  Path(code): Path<String>,
) -> Result<Json<AdmissionView>, ApiError> {
  let state = app.dataset.validate(&code)?;
  Ok(Json(AdmissionView {
    state:    state.name.clone(),
    admitted: state.admission_date,
  }))
}
