//! The reference dataset and the state-code validator.
//!
//! A [`Dataset`] is built once at startup, wrapped in an `Arc` and shared
//! read-only with every request. Nothing mutates it afterwards.

use std::{collections::HashMap, path::Path};

use crate::{Error, Result, state::State};

/// The 50 states, compiled into the binary.
const EMBEDDED: &str = include_str!("../data/states.json");

// ─── Contiguity filter ───────────────────────────────────────────────────────

/// Partition applied by the collection listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContigFilter {
  #[default]
  All,
  /// The lower 48.
  Contiguous,
  /// Alaska and Hawaii.
  NonContiguous,
}

impl ContigFilter {
  /// Parse the `contig` query parameter. `"true"` and `"false"` are matched
  /// case-insensitively; anything else, including absence, means no filter.
  pub fn from_param(param: Option<&str>) -> Self {
    match param {
      Some(p) if p.eq_ignore_ascii_case("true") => Self::Contiguous,
      Some(p) if p.eq_ignore_ascii_case("false") => Self::NonContiguous,
      _ => Self::All,
    }
  }

  pub fn admits(self, state: &State) -> bool {
    match self {
      Self::All => true,
      Self::Contiguous => state.is_contiguous(),
      Self::NonContiguous => !state.is_contiguous(),
    }
  }
}

// ─── Dataset ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Dataset {
  states: Vec<State>,
  /// code → position in `states`
  by_code: HashMap<String, usize>,
}

impl Dataset {
  /// The dataset shipped with the crate.
  pub fn embedded() -> Result<Self> { Self::from_json(EMBEDDED) }

  /// Load a dataset from a JSON file containing an array of states.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let raw = std::fs::read_to_string(path)?;
    Self::from_json(&raw)
  }

  pub fn from_json(raw: &str) -> Result<Self> {
    let states: Vec<State> = serde_json::from_str(raw)?;
    Self::new(states)
  }

  /// Index `states` by code, rejecting malformed or duplicate codes.
  pub fn new(states: Vec<State>) -> Result<Self> {
    let mut by_code = HashMap::with_capacity(states.len());
    for (i, state) in states.iter().enumerate() {
      let code = &state.code;
      if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(Error::InvalidDataset(format!(
          "state code must be two uppercase letters: {code:?}"
        )));
      }
      if by_code.insert(code.clone(), i).is_some() {
        return Err(Error::InvalidDataset(format!("duplicate state code: {code}")));
      }
    }
    Ok(Self { states, by_code })
  }

  /// Normalise `raw` to uppercase (full Unicode case mapping) and look it up.
  ///
  /// This is the guard every per-state operation passes through first. The
  /// returned [`State`] carries the canonical code for everything downstream.
  pub fn validate(&self, raw: &str) -> Result<&State> {
    let code = raw.to_uppercase();
    match self.get(&code) {
      Some(state) => Ok(state),
      None => {
        tracing::debug!(code = raw, "rejected state code");
        Err(Error::InvalidStateCode(raw.to_owned()))
      }
    }
  }

  /// Exact, case-sensitive lookup.
  pub fn get(&self, code: &str) -> Option<&State> {
    self.by_code.get(code).map(|&i| &self.states[i])
  }

  pub fn iter(&self) -> impl Iterator<Item = &State> { self.states.iter() }

  /// States admitted by `filter`, in dataset order.
  pub fn filter(&self, filter: ContigFilter) -> impl Iterator<Item = &State> {
    self.states.iter().filter(move |s| filter.admits(s))
  }

  pub fn len(&self) -> usize { self.states.len() }

  pub fn is_empty(&self) -> bool { self.states.is_empty() }
}
