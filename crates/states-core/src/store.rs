//! The `FunFactStore` trait.
//!
//! A single-collection document store keyed by state code. Implemented by
//! storage backends (e.g. `states-store-sqlite`); the services in
//! [`crate::query`] and [`crate::editor`] depend on this abstraction only.

use std::future::Future;

use crate::funfact::{FunFactRecord, FunFacts};

/// Abstraction over the fun fact document store.
///
/// There is no conditional update: [`save`](FunFactStore::save) overwrites the
/// whole document, so two concurrent fetch-mutate-save cycles on the same
/// state resolve as last-write-wins.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait FunFactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Find the record for `state_code`. Returns `None` if none was ever
  /// written.
  fn find_by_code<'a>(
    &'a self,
    state_code: &'a str,
  ) -> impl Future<Output = Result<Option<FunFactRecord>, Self::Error>> + Send + 'a;

  /// Every record, projected to `{stateCode, funfacts}`.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<FunFacts>, Self::Error>> + Send + '_;

  /// Create and persist a new record. The store assigns the record id.
  ///
  /// If a record for `state_code` already exists, its sequence is replaced by
  /// `funfacts` and its id is kept.
  fn create(
    &self,
    state_code: String,
    funfacts: Vec<String>,
  ) -> impl Future<Output = Result<FunFactRecord, Self::Error>> + Send + '_;

  /// Persist a mutated record, replacing the stored sequence wholesale.
  fn save<'a>(
    &'a self,
    record: &'a FunFactRecord,
  ) -> impl Future<Output = Result<FunFactRecord, Self::Error>> + Send + 'a;
}
