//! SQLite backend for the fun fact document store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Each row is one document: the record id,
//! the state code key, and the fun fact sequence as a JSON array.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
