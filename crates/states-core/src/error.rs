//! Error types for `states-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The path parameter does not name one of the 50 states.
  #[error("Invalid state abbreviation parameter")]
  InvalidStateCode(String),

  /// The state has no fun fact record, or its sequence is empty. Carries the
  /// full state name.
  #[error("No Fun Facts found for {0}")]
  NoFunFacts(String),

  #[error("No Fun Fact found at that index for {0}")]
  NoFunFactAtIndex(String),

  #[error("invalid dataset: {0}")]
  InvalidDataset(String),

  #[error("dataset parse error: {0}")]
  Dataset(#[from] serde_json::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error from a [`FunFactStore`](crate::store::FunFactStore).
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
