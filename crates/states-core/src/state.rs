//! State: one row of the static reference dataset, and the merged view that
//! decorates it with fun facts on read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Codes of the two states that do not border the other 48.
pub const NON_CONTIGUOUS: [&str; 2] = ["AK", "HI"];

// ─── State ───────────────────────────────────────────────────────────────────

/// Static attributes of a US state. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
  /// Full name, e.g. "Kansas".
  #[serde(rename = "state")]
  pub name:             String,
  pub slug:             String,
  /// Two-letter uppercase abbreviation; the dataset key.
  pub code:             String,
  pub nickname:         String,
  pub admission_date:   NaiveDate,
  /// Order in which the state joined the union (Delaware is 1).
  pub admission_number: u8,
  pub capital_city:     String,
  pub population:       u64,
}

impl State {
  pub fn is_contiguous(&self) -> bool {
    !NON_CONTIGUOUS.contains(&self.code.as_str())
  }

  /// Population with en-US thousands separators, e.g. `"39,538,223"`.
  pub fn population_display(&self) -> String { group_thousands(self.population) }
}

/// Insert a `,` between every group of three digits, counting from the right.
pub fn group_thousands(n: u64) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

// ─── Merged view ─────────────────────────────────────────────────────────────

/// A [`State`] with its fun facts merged in.
///
/// `funfacts` is omitted from the JSON entirely (not rendered as `[]`) when the
/// state has no record or an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateView {
  #[serde(flatten)]
  pub state:    State,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub funfacts: Option<Vec<String>>,
}

impl StateView {
  /// Merge `funfacts` into `state`, dropping an empty sequence.
  pub fn merge(state: State, funfacts: Option<Vec<String>>) -> Self {
    Self {
      state,
      funfacts: funfacts.filter(|f| !f.is_empty()),
    }
  }
}
