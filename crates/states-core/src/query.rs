//! Read paths: single-state lookup, random fun fact, and the collection
//! listing.
//!
//! Per-state functions take a [`State`] that has already passed
//! [`Dataset::validate`].

use std::collections::HashMap;

use rand::Rng as _;

use crate::{
  Error, Result,
  dataset::{ContigFilter, Dataset},
  state::{State, StateView},
  store::FunFactStore,
};

/// The state's static attributes with its fun facts merged in, if it has any.
pub async fn get_state<S: FunFactStore>(store: &S, state: &State) -> Result<StateView> {
  let record = store
    .find_by_code(&state.code)
    .await
    .map_err(Error::store)?;
  Ok(StateView::merge(state.clone(), record.map(|r| r.funfacts)))
}

/// One of the state's fun facts, chosen uniformly at random.
pub async fn random_funfact<S: FunFactStore>(store: &S, state: &State) -> Result<String> {
  let mut facts = store
    .find_by_code(&state.code)
    .await
    .map_err(Error::store)?
    .map(|r| r.funfacts)
    .unwrap_or_default();

  if facts.is_empty() {
    return Err(Error::NoFunFacts(state.name.clone()));
  }
  let i = rand::thread_rng().gen_range(0..facts.len());
  Ok(facts.swap_remove(i))
}

/// Every state admitted by `filter`, with fun facts merged in from a single
/// bulk read.
///
/// A store failure is logged and the static data is returned unmerged.
pub async fn list_states<S: FunFactStore>(
  store: &S,
  dataset: &Dataset,
  filter: ContigFilter,
) -> Vec<StateView> {
  let mut by_code: HashMap<String, Vec<String>> = match store.find_all().await {
    Ok(all) => all
      .into_iter()
      .map(|f| (f.state_code, f.funfacts))
      .collect(),
    Err(e) => {
      tracing::error!(error = %e, "failed to fetch fun facts; listing states without them");
      HashMap::new()
    }
  };

  dataset
    .filter(filter)
    .map(|s| StateView::merge(s.clone(), by_code.remove(&s.code)))
    .collect()
}
