//! SQL schema for the fun fact store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One document per state. `state_code` is the lookup key; it refers to the
-- static dataset but nothing enforces that here.
CREATE TABLE IF NOT EXISTS funfacts (
    record_id   TEXT PRIMARY KEY,
    state_code  TEXT NOT NULL UNIQUE,
    funfacts    TEXT NOT NULL DEFAULT '[]'   -- JSON array of strings
);

PRAGMA user_version = 1;
";
