//! Core types and services for the US states reference API.
//!
//! This crate is deliberately free of HTTP and database dependencies. It owns
//! the immutable reference dataset, the state-code validator, the
//! [`store::FunFactStore`] abstraction and the query/editor services built on
//! top of it.

pub mod dataset;
pub mod editor;
pub mod error;
pub mod funfact;
pub mod query;
pub mod state;
pub mod store;

#[cfg(test)]
mod memory;

pub use dataset::{ContigFilter, Dataset};
pub use error::{Error, Result};
