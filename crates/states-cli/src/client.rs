//! Async HTTP client wrapping the states JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use states_core::{funfact::FunFactRecord, state::StateView};

/// One of the single-field endpoints under `/states/:code/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Field {
  Capital,
  Nickname,
  Population,
  Admission,
}

impl Field {
  fn path(self) -> &'static str {
    match self {
      Self::Capital => "capital",
      Self::Nickname => "nickname",
      Self::Population => "population",
      Self::Admission => "admission",
    }
  }
}

/// Async HTTP client for the states JSON REST API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self {
      client,
      base_url: base_url.into(),
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/states{}", self.base_url.trim_end_matches('/'), path)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// `GET /states[?contig=..]`
  pub async fn list_states(&self, contig: Option<bool>) -> Result<Vec<StateView>> {
    let mut req = self.client.get(self.url(""));
    if let Some(c) = contig {
      req = req.query(&[("contig", c.to_string())]);
    }
    let resp = req.send().await.context("GET /states failed")?;
    decode(resp, "GET /states").await
  }

  /// `GET /states/:code`
  pub async fn get_state(&self, code: &str) -> Result<StateView> {
    let resp = self
      .client
      .get(self.url(&format!("/{code}")))
      .send()
      .await
      .with_context(|| format!("GET /states/{code} failed"))?;
    decode(resp, "GET /states/:code").await
  }

  /// `GET /states/:code/<field>`; returned as the raw JSON object.
  pub async fn get_field(&self, code: &str, field: Field) -> Result<Value> {
    let resp = self
      .client
      .get(self.url(&format!("/{code}/{}", field.path())))
      .send()
      .await
      .with_context(|| format!("GET /states/{code}/{} failed", field.path()))?;
    decode(resp, "GET /states/:code/<field>").await
  }

  /// `GET /states/:code/funfact`
  pub async fn random_funfact(&self, code: &str) -> Result<String> {
    let resp = self
      .client
      .get(self.url(&format!("/{code}/funfact")))
      .send()
      .await
      .context("GET /funfact failed")?;
    let body: Value = decode(resp, "GET /states/:code/funfact").await?;
    body["funfact"]
      .as_str()
      .map(str::to_owned)
      .ok_or_else(|| anyhow!("response has no funfact field"))
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// `POST /states/:code/funfact`
  pub async fn add_funfacts(&self, code: &str, funfacts: &[String]) -> Result<FunFactRecord> {
    let resp = self
      .client
      .post(self.url(&format!("/{code}/funfact")))
      .json(&json!({ "funfacts": funfacts }))
      .send()
      .await
      .context("POST /funfact failed")?;
    decode(resp, "POST /states/:code/funfact").await
  }

  /// `PATCH /states/:code/funfact`
  pub async fn patch_funfact(
    &self,
    code: &str,
    index: usize,
    funfact: &str,
  ) -> Result<FunFactRecord> {
    let resp = self
      .client
      .patch(self.url(&format!("/{code}/funfact")))
      .json(&json!({ "index": index, "funfact": funfact }))
      .send()
      .await
      .context("PATCH /funfact failed")?;
    decode(resp, "PATCH /states/:code/funfact").await
  }

  /// `DELETE /states/:code/funfact`
  pub async fn delete_funfact(&self, code: &str, index: usize) -> Result<FunFactRecord> {
    let resp = self
      .client
      .delete(self.url(&format!("/{code}/funfact")))
      .json(&json!({ "index": index }))
      .send()
      .await
      .context("DELETE /funfact failed")?;
    decode(resp, "DELETE /states/:code/funfact").await
  }
}

/// Deserialise a success body, or turn an error body into a readable error.
async fn decode<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T> {
  let status = resp.status();
  if status.is_success() {
    return resp.json().await.with_context(|| format!("deserialising {what}"));
  }
  let body: Value = resp.json().await.unwrap_or(Value::Null);
  let detail = body["message"]
    .as_str()
    .or_else(|| body["error"].as_str())
    .unwrap_or("no details");
  Err(anyhow!("{what} → {status}: {detail}"))
}
