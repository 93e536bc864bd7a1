//! In-memory [`FunFactStore`] for unit tests.

use std::{collections::BTreeMap, sync::Mutex};

use thiserror::Error;
use uuid::Uuid;

use crate::{
  funfact::{FunFactRecord, FunFacts},
  store::FunFactStore,
};

#[derive(Debug, Error)]
pub enum MemoryError {
  #[error("store unavailable")]
  Unavailable,
  #[error("record not found: {0}")]
  RecordNotFound(Uuid),
}

/// Records keyed by state code. With `failing` set, every call errors.
#[derive(Default)]
pub struct MemoryStore {
  records: Mutex<BTreeMap<String, FunFactRecord>>,
  failing: bool,
}

impl MemoryStore {
  pub fn failing() -> Self {
    Self {
      failing: true,
      ..Self::default()
    }
  }

  /// Insert a record directly, bypassing the editor.
  pub fn seed(&self, state_code: &str, facts: &[&str]) {
    let record = FunFactRecord {
      record_id:  Uuid::new_v4(),
      state_code: state_code.to_owned(),
      funfacts:   facts.iter().map(|s| s.to_string()).collect(),
    };
    self.records.lock().unwrap().insert(state_code.to_owned(), record);
  }

  pub fn facts(&self, state_code: &str) -> Option<Vec<String>> {
    self.records.lock().unwrap().get(state_code).map(|r| r.funfacts.clone())
  }

  fn check(&self) -> Result<(), MemoryError> {
    if self.failing { Err(MemoryError::Unavailable) } else { Ok(()) }
  }
}

impl FunFactStore for MemoryStore {
  type Error = MemoryError;

  async fn find_by_code(&self, state_code: &str) -> Result<Option<FunFactRecord>, MemoryError> {
    self.check()?;
    Ok(self.records.lock().unwrap().get(state_code).cloned())
  }

  async fn find_all(&self) -> Result<Vec<FunFacts>, MemoryError> {
    self.check()?;
    Ok(
      self
        .records
        .lock()
        .unwrap()
        .values()
        .cloned()
        .map(FunFacts::from)
        .collect(),
    )
  }

  async fn create(
    &self,
    state_code: String,
    funfacts: Vec<String>,
  ) -> Result<FunFactRecord, MemoryError> {
    self.check()?;
    let mut records = self.records.lock().unwrap();
    let record = records
      .entry(state_code.clone())
      .and_modify(|r| r.funfacts = funfacts.clone())
      .or_insert_with(|| FunFactRecord {
        record_id: Uuid::new_v4(),
        state_code,
        funfacts,
      });
    Ok(record.clone())
  }

  async fn save(&self, record: &FunFactRecord) -> Result<FunFactRecord, MemoryError> {
    self.check()?;
    let mut records = self.records.lock().unwrap();
    match records.get_mut(&record.state_code) {
      Some(stored) if stored.record_id == record.record_id => {
        stored.funfacts = record.funfacts.clone();
        Ok(stored.clone())
      }
      _ => Err(MemoryError::RecordNotFound(record.record_id)),
    }
  }
}
