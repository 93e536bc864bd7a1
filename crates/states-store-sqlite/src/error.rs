//! Error type for `states-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  /// `save` was called with a record id that is not in the collection.
  #[error("record not found: {0}")]
  RecordNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
