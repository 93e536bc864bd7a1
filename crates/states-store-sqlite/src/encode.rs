//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings; the fun fact sequence as
//! a compact JSON array.

use states_core::funfact::{FunFactRecord, FunFacts};
use uuid::Uuid;

use crate::Result;

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Fun fact sequence ───────────────────────────────────────────────────────

pub fn encode_funfacts(facts: &[String]) -> Result<String> {
  Ok(serde_json::to_string(facts)?)
}

pub fn decode_funfacts(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `funfacts` row.
pub struct RawRecord {
  pub record_id:  String,
  pub state_code: String,
  pub funfacts:   String,
}

impl RawRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      record_id:  row.get(0)?,
      state_code: row.get(1)?,
      funfacts:   row.get(2)?,
    })
  }

  pub fn into_record(self) -> Result<FunFactRecord> {
    Ok(FunFactRecord {
      record_id:  decode_uuid(&self.record_id)?,
      state_code: self.state_code,
      funfacts:   decode_funfacts(&self.funfacts)?,
    })
  }
}

/// A `(state_code, funfacts)` projection row.
pub struct RawFunFacts {
  pub state_code: String,
  pub funfacts:   String,
}

impl RawFunFacts {
  pub fn into_funfacts(self) -> Result<FunFacts> {
    Ok(FunFacts {
      state_code: self.state_code,
      funfacts:   decode_funfacts(&self.funfacts)?,
    })
  }
}
