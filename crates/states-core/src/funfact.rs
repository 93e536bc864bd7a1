//! Fun fact records, the only mutable data in the system.
//!
//! One record per state code, created lazily on the first write. The
//! `funfacts` sequence is ordered and clients address entries by 1-based
//! position.

use std::{fmt, num::NonZeroUsize};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Record ──────────────────────────────────────────────────────────────────

/// A persisted fun fact document, keyed by `stateCode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunFactRecord {
  /// Document id assigned by the store on create.
  #[serde(rename = "_id")]
  pub record_id:  Uuid,
  #[serde(rename = "stateCode")]
  pub state_code: String,
  pub funfacts:   Vec<String>,
}

impl FunFactRecord {
  /// Append `facts` to the end of the sequence. Duplicates are kept.
  pub fn append(&mut self, facts: impl IntoIterator<Item = String>) {
    self.funfacts.extend(facts);
  }

  /// Replace the entry at `index`. Returns `false` if out of range.
  pub fn replace_at(&mut self, index: FactIndex, funfact: String) -> bool {
    match self.funfacts.get_mut(index.position()) {
      Some(slot) => {
        *slot = funfact;
        true
      }
      None => false,
    }
  }

  /// Remove the entry at `index`, shifting later entries down. Returns the
  /// removed fact, or `None` if out of range.
  pub fn remove_at(&mut self, index: FactIndex) -> Option<String> {
    let pos = index.position();
    (pos < self.funfacts.len()).then(|| self.funfacts.remove(pos))
  }
}

/// Projection of a record used by bulk reads: the key and the sequence only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunFacts {
  #[serde(rename = "stateCode")]
  pub state_code: String,
  pub funfacts:   Vec<String>,
}

impl From<FunFactRecord> for FunFacts {
  fn from(r: FunFactRecord) -> Self {
    Self {
      state_code: r.state_code,
      funfacts:   r.funfacts,
    }
  }
}

// ─── Index ───────────────────────────────────────────────────────────────────

/// A client-facing, 1-based position in a fun fact sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FactIndex(NonZeroUsize);

impl FactIndex {
  /// Returns `None` for zero.
  pub fn new(one_based: usize) -> Option<Self> {
    NonZeroUsize::new(one_based).map(Self)
  }

  /// The 1-based value as supplied by the client.
  pub fn get(self) -> usize { self.0.get() }

  /// The 0-based position inside the sequence.
  pub fn position(self) -> usize { self.0.get() - 1 }
}

impl fmt::Display for FactIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
