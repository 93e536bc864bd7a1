//! Write paths over a state's fun fact sequence.
//!
//! Every operation is fetch-mutate-save with no version check; concurrent
//! edits to the same state resolve as last-write-wins. Each returns the full
//! persisted record.

use crate::{
  Error, Result,
  funfact::{FactIndex, FunFactRecord},
  state::State,
  store::FunFactStore,
};

/// Append `funfacts` to the state's record, creating the record on first
/// write.
pub async fn create_funfacts<S: FunFactStore>(
  store: &S,
  state: &State,
  funfacts: Vec<String>,
) -> Result<FunFactRecord> {
  let added = funfacts.len();
  let record = match store
    .find_by_code(&state.code)
    .await
    .map_err(Error::store)?
  {
    Some(mut record) => {
      record.append(funfacts);
      store.save(&record).await.map_err(Error::store)?
    }
    None => store
      .create(state.code.clone(), funfacts)
      .await
      .map_err(Error::store)?,
  };

  tracing::info!(code = %state.code, added, total = record.funfacts.len(), "fun facts added");
  Ok(record)
}

/// Replace the fun fact at `index`.
pub async fn patch_funfact<S: FunFactStore>(
  store: &S,
  state: &State,
  index: FactIndex,
  funfact: String,
) -> Result<FunFactRecord> {
  let mut record = fetch_nonempty(store, state).await?;
  if !record.replace_at(index, funfact) {
    return Err(Error::NoFunFactAtIndex(state.name.clone()));
  }
  let saved = store.save(&record).await.map_err(Error::store)?;

  tracing::info!(code = %state.code, %index, "fun fact replaced");
  Ok(saved)
}

/// Remove the fun fact at `index`; later entries shift down by one.
pub async fn delete_funfact<S: FunFactStore>(
  store: &S,
  state: &State,
  index: FactIndex,
) -> Result<FunFactRecord> {
  let mut record = fetch_nonempty(store, state).await?;
  if record.remove_at(index).is_none() {
    return Err(Error::NoFunFactAtIndex(state.name.clone()));
  }
  let saved = store.save(&record).await.map_err(Error::store)?;

  tracing::info!(code = %state.code, %index, "fun fact removed");
  Ok(saved)
}

async fn fetch_nonempty<S: FunFactStore>(store: &S, state: &State) -> Result<FunFactRecord> {
  match store
    .find_by_code(&state.code)
    .await
    .map_err(Error::store)?
  {
    Some(record) if !record.funfacts.is_empty() => Ok(record),
    _ => Err(Error::NoFunFacts(state.name.clone())),
  }
}
