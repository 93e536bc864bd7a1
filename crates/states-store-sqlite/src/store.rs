//! [`SqliteStore`] — the SQLite implementation of [`FunFactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use states_core::{
  funfact::{FunFactRecord, FunFacts},
  store::FunFactStore,
};

use crate::{
  Error, Result,
  encode::{RawFunFacts, RawRecord, decode_uuid, encode_funfacts, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A fun fact collection backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── FunFactStore impl ───────────────────────────────────────────────────────

impl FunFactStore for SqliteStore {
  type Error = Error;

  async fn find_by_code(&self, state_code: &str) -> Result<Option<FunFactRecord>> {
    let code = state_code.to_owned();

    let raw: Option<RawRecord> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT record_id, state_code, funfacts FROM funfacts WHERE state_code = ?1",
              rusqlite::params![code],
              RawRecord::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRecord::into_record).transpose()
  }

  async fn find_all(&self) -> Result<Vec<FunFacts>> {
    let raws: Vec<RawFunFacts> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT state_code, funfacts FROM funfacts")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawFunFacts {
              state_code: row.get(0)?,
              funfacts:   row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawFunFacts::into_funfacts).collect()
  }

  async fn create(&self, state_code: String, funfacts: Vec<String>) -> Result<FunFactRecord> {
    let mut record = FunFactRecord {
      record_id: Uuid::new_v4(),
      state_code,
      funfacts,
    };

    let id_str    = encode_uuid(record.record_id);
    let code      = record.state_code.clone();
    let facts_str = encode_funfacts(&record.funfacts)?;

    // A concurrent first write may have created the document already; take it
    // over and keep its id.
    let stored_id: String = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "INSERT INTO funfacts (record_id, state_code, funfacts) VALUES (?1, ?2, ?3)
           ON CONFLICT(state_code) DO UPDATE SET funfacts = excluded.funfacts
           RETURNING record_id",
          rusqlite::params![id_str, code, facts_str],
          |row| row.get(0),
        )?)
      })
      .await?;
    record.record_id = decode_uuid(&stored_id)?;

    tracing::debug!(code = %record.state_code, id = %record.record_id, "fun fact record created");
    Ok(record)
  }

  async fn save(&self, record: &FunFactRecord) -> Result<FunFactRecord> {
    let id_str    = encode_uuid(record.record_id);
    let facts_str = encode_funfacts(&record.funfacts)?;

    // Whole-sequence overwrite, no version check.
    let updated = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE funfacts SET funfacts = ?2 WHERE record_id = ?1",
          rusqlite::params![id_str, facts_str],
        )?)
      })
      .await?;

    if updated == 0 {
      return Err(Error::RecordNotFound(record.record_id));
    }
    Ok(record.clone())
  }
}
