//! Request body validation for the fun fact endpoints.
//!
//! Bodies are read as loose JSON and checked field by field so that every
//! missing or mistyped field gets its own 400 message. A field counts as
//! missing when it is absent or holds an empty value (`null`, `false`, `0` or
//! `""`).

use bytes::Bytes;
use serde_json::{Map, Value};
use states_core::funfact::FactIndex;

use crate::error::ApiError;

pub const FUNFACTS_REQUIRED: &str = "State fun facts value required";
pub const FUNFACTS_NOT_ARRAY: &str = "State fun facts value must be an array";
pub const FUNFACTS_NOT_STRINGS: &str = "State fun facts values must be strings";
pub const INDEX_REQUIRED: &str = "State fun fact index value required";
pub const INDEX_INVALID: &str = "Invalid index value. Index must be a positive integer.";
pub const FUNFACT_REQUIRED: &str = "State fun fact value required";
pub const FUNFACT_NOT_STRING: &str = "State fun fact value must be a string";
pub const MALFORMED: &str = "Malformed JSON body";

// ─── Bodies ──────────────────────────────────────────────────────────────────

/// `POST /states/{code}/funfact`: `{"funfacts": ["...", ...]}`
#[derive(Debug, PartialEq, Eq)]
pub struct CreateBody {
  pub funfacts: Vec<String>,
}

impl CreateBody {
  pub fn parse(raw: &Bytes) -> Result<Self, ApiError> {
    let fields = object(raw)?;
    let funfacts = present(&fields, "funfacts").ok_or_else(|| bad(FUNFACTS_REQUIRED))?;
    let Value::Array(items) = funfacts else {
      return Err(bad(FUNFACTS_NOT_ARRAY));
    };
    let funfacts = items
      .iter()
      .map(|v| v.as_str().map(str::to_owned))
      .collect::<Option<Vec<_>>>()
      .ok_or_else(|| bad(FUNFACTS_NOT_STRINGS))?;
    Ok(Self { funfacts })
  }
}

/// `PATCH /states/{code}/funfact`: `{"index": 1, "funfact": "..."}`
#[derive(Debug, PartialEq, Eq)]
pub struct PatchBody {
  pub index:   FactIndex,
  pub funfact: String,
}

impl PatchBody {
  pub fn parse(raw: &Bytes) -> Result<Self, ApiError> {
    let fields = object(raw)?;
    let index = present(&fields, "index").ok_or_else(|| bad(INDEX_REQUIRED))?;
    let funfact = present(&fields, "funfact").ok_or_else(|| bad(FUNFACT_REQUIRED))?;
    let funfact = funfact.as_str().ok_or_else(|| bad(FUNFACT_NOT_STRING))?;
    Ok(Self {
      index:   parse_index(index)?,
      funfact: funfact.to_owned(),
    })
  }
}

/// `DELETE /states/{code}/funfact`: `{"index": 1}`
#[derive(Debug, PartialEq, Eq)]
pub struct DeleteBody {
  pub index: FactIndex,
}

impl DeleteBody {
  pub fn parse(raw: &Bytes) -> Result<Self, ApiError> {
    let fields = object(raw)?;
    let index = present(&fields, "index").ok_or_else(|| bad(INDEX_REQUIRED))?;
    Ok(Self {
      index: parse_index(index)?,
    })
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn bad(message: &str) -> ApiError { ApiError::BadRequest(message.to_owned()) }

/// Decode the body as a JSON object. An empty body, or any JSON value that is
/// not an object, yields no fields.
fn object(raw: &Bytes) -> Result<Map<String, Value>, ApiError> {
  if raw.iter().all(u8::is_ascii_whitespace) {
    return Ok(Map::new());
  }
  match serde_json::from_slice(raw) {
    Ok(Value::Object(fields)) => Ok(fields),
    Ok(_) => Ok(Map::new()),
    Err(_) => Err(bad(MALFORMED)),
  }
}

/// The field's value, unless it is absent or empty.
fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
  fields.get(key).filter(|v| !is_empty_value(v))
}

fn is_empty_value(v: &Value) -> bool {
  match v {
    Value::Null => true,
    Value::Bool(b) => !b,
    Value::Number(n) => n.as_f64() == Some(0.0),
    Value::String(s) => s.is_empty(),
    Value::Array(_) | Value::Object(_) => false,
  }
}

/// Accept an integer, a float (truncated toward zero) or a string holding an
/// integer. Must come out ≥ 1.
fn parse_index(v: &Value) -> Result<FactIndex, ApiError> {
  let n: Option<i64> = match v {
    Value::Number(n) => n
      .as_i64()
      .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
    Value::String(s) => s.trim().parse().ok(),
    _ => None,
  };
  n.and_then(|n| usize::try_from(n).ok())
    .and_then(FactIndex::new)
    .ok_or_else(|| bad(INDEX_INVALID))
}
