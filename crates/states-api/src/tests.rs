//! Router tests driven through `tower::ServiceExt::oneshot`.

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use serde_json::{Value, json};
use states_core::{
  Dataset,
  funfact::{FunFactRecord, FunFacts},
  store::FunFactStore,
};
use states_store_sqlite::SqliteStore;
use tower::ServiceExt as _;

use crate::{AppState, api_router};

// ─── Fixtures ─────────────────────────────────────────────────────────────────

async fn make_state() -> AppState<SqliteStore> {
  let store = SqliteStore::open_in_memory().await.unwrap();
  AppState::new(store, Dataset::embedded().unwrap())
}

/// A store whose every call fails, for the fault paths.
#[derive(Clone)]
struct FailingStore;

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct Unreachable;

impl FunFactStore for FailingStore {
  type Error = Unreachable;

  async fn find_by_code(&self, _: &str) -> Result<Option<FunFactRecord>, Unreachable> {
    Err(Unreachable)
  }

  async fn find_all(&self) -> Result<Vec<FunFacts>, Unreachable> { Err(Unreachable) }

  async fn create(&self, _: String, _: Vec<String>) -> Result<FunFactRecord, Unreachable> {
    Err(Unreachable)
  }

  async fn save(&self, _: &FunFactRecord) -> Result<FunFactRecord, Unreachable> {
    Err(Unreachable)
  }
}

async fn send<S>(state: AppState<S>, method: &str, uri: &str, body: Option<Value>) -> Response
where
  S: FunFactStore + Clone + Send + Sync + 'static,
{
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  api_router(state).oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

async fn expect(resp: Response, status: StatusCode) -> Value {
  assert_eq!(resp.status(), status);
  json_body(resp).await
}

// ─── Listing ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_fifty_states() {
  let state = make_state().await;
  let body = expect(send(state, "GET", "/states", None).await, StatusCode::OK).await;
  let states = body.as_array().unwrap();
  assert_eq!(states.len(), 50);
  assert!(states.iter().all(|s| s.get("funfacts").is_none()));
}

#[tokio::test]
async fn list_contig_filters() {
  let state = make_state().await;

  let body = expect(
    send(state.clone(), "GET", "/states?contig=true", None).await,
    StatusCode::OK,
  )
  .await;
  let codes: Vec<&str> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|s| s["code"].as_str().unwrap())
    .collect();
  assert_eq!(codes.len(), 48);
  assert!(!codes.contains(&"AK") && !codes.contains(&"HI"));

  let body = expect(
    send(state, "GET", "/states?contig=FALSE", None).await,
    StatusCode::OK,
  )
  .await;
  let codes: Vec<&str> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|s| s["code"].as_str().unwrap())
    .collect();
  assert_eq!(codes, ["AK", "HI"]);
}

#[tokio::test]
async fn list_merges_funfacts() {
  let state = make_state().await;
  send(
    state.clone(),
    "POST",
    "/states/ks/funfact",
    Some(json!({ "funfacts": ["wheat"] })),
  )
  .await;

  let body = expect(send(state, "GET", "/states", None).await, StatusCode::OK).await;
  let kansas = body
    .as_array()
    .unwrap()
    .iter()
    .find(|s| s["code"] == "KS")
    .unwrap();
  assert_eq!(kansas["funfacts"], json!(["wheat"]));
}

#[tokio::test]
async fn list_fails_open_when_store_is_down() {
  let state = AppState::new(FailingStore, Dataset::embedded().unwrap());
  let body = expect(send(state, "GET", "/states", None).await, StatusCode::OK).await;
  assert_eq!(body.as_array().unwrap().len(), 50);
}

// ─── Single state ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_state_by_lowercase_code() {
  let state = make_state().await;
  let body = expect(send(state, "GET", "/states/ks", None).await, StatusCode::OK).await;
  assert_eq!(body["state"], "Kansas");
  assert_eq!(body["code"], "KS");
  assert_eq!(body["capital_city"], "Topeka");
  assert!(body.get("funfacts").is_none());
}

#[tokio::test]
async fn invalid_code_is_400_on_every_route() {
  let state = make_state().await;
  for (method, uri) in [
    ("GET", "/states/zz"),
    ("GET", "/states/zz/capital"),
    ("GET", "/states/zz/nickname"),
    ("GET", "/states/zz/population"),
    ("GET", "/states/zz/admission"),
    ("GET", "/states/zz/funfact"),
    ("POST", "/states/zz/funfact"),
    ("PATCH", "/states/zz/funfact"),
    ("DELETE", "/states/zz/funfact"),
  ] {
    let resp = send(state.clone(), method, uri, None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Invalid state abbreviation parameter");
  }
}

#[tokio::test]
async fn capital_is_case_insensitive() {
  let state = make_state().await;
  let lower = expect(
    send(state.clone(), "GET", "/states/ca/capital", None).await,
    StatusCode::OK,
  )
  .await;
  let upper = expect(send(state, "GET", "/states/CA/capital", None).await, StatusCode::OK).await;
  assert_eq!(lower, upper);
  assert_eq!(lower, json!({ "state": "California", "capital": "Sacramento" }));
}

#[tokio::test]
async fn single_field_routes() {
  let state = make_state().await;

  let body = expect(
    send(state.clone(), "GET", "/states/ks/nickname", None).await,
    StatusCode::OK,
  )
  .await;
  assert_eq!(body, json!({ "state": "Kansas", "nickname": "Sunflower State" }));

  let body = expect(
    send(state.clone(), "GET", "/states/ca/population", None).await,
    StatusCode::OK,
  )
  .await;
  assert_eq!(body, json!({ "state": "California", "population": "39,538,223" }));

  let body = expect(send(state, "GET", "/states/de/admission", None).await, StatusCode::OK).await;
  assert_eq!(body, json!({ "state": "Delaware", "admitted": "1787-12-07" }));
}

#[tokio::test]
async fn get_state_store_fault_is_500() {
  let state = AppState::new(FailingStore, Dataset::embedded().unwrap());
  let body = expect(
    send(state.clone(), "GET", "/states/ks", None).await,
    StatusCode::INTERNAL_SERVER_ERROR,
  )
  .await;
  assert_eq!(body, json!({ "error": "Internal Server Error" }));

  // Static fields never touch the store.
  let resp = send(state, "GET", "/states/ks/capital", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

// ─── Fun facts ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn random_funfact_without_record_names_state() {
  let state = make_state().await;
  let body = expect(
    send(state, "GET", "/states/nh/funfact", None).await,
    StatusCode::NOT_FOUND,
  )
  .await;
  assert_eq!(body["message"], "No Fun Facts found for New Hampshire");
}

#[tokio::test]
async fn random_funfact_returns_a_recorded_fact() {
  let state = make_state().await;
  let facts = ["a", "b", "c"];
  send(
    state.clone(),
    "POST",
    "/states/ks/funfact",
    Some(json!({ "funfacts": facts })),
  )
  .await;

  for _ in 0..20 {
    let body = expect(
      send(state.clone(), "GET", "/states/KS/funfact", None).await,
      StatusCode::OK,
    )
    .await;
    let fact = body["funfact"].as_str().unwrap();
    assert!(facts.contains(&fact), "unexpected {fact}");
  }
}

#[tokio::test]
async fn create_appends_across_calls() {
  let state = make_state().await;
  let first = expect(
    send(
      state.clone(),
      "POST",
      "/states/KS/funfact",
      Some(json!({ "funfacts": ["fact1"] })),
    )
    .await,
    StatusCode::CREATED,
  )
  .await;
  assert_eq!(first["stateCode"], "KS");
  assert_eq!(first["funfacts"], json!(["fact1"]));

  let second = expect(
    send(
      state.clone(),
      "POST",
      "/states/ks/funfact",
      Some(json!({ "funfacts": ["fact2"] })),
    )
    .await,
    StatusCode::CREATED,
  )
  .await;
  assert_eq!(second["_id"], first["_id"]);
  assert_eq!(second["funfacts"], json!(["fact1", "fact2"]));

  let view = expect(send(state, "GET", "/states/ks", None).await, StatusCode::OK).await;
  assert_eq!(view["funfacts"], json!(["fact1", "fact2"]));
}

#[tokio::test]
async fn create_rejects_bad_bodies() {
  let state = make_state().await;
  for (body, message) in [
    (None, "State fun facts value required"),
    (Some(json!({})), "State fun facts value required"),
    (Some(json!({ "funfacts": "one" })), "State fun facts value must be an array"),
    (Some(json!({ "funfacts": [1, 2] })), "State fun facts values must be strings"),
  ] {
    let resp = send(state.clone(), "POST", "/states/ks/funfact", body).await;
    let json = expect(resp, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["message"], message);
  }
  let resp = send(state, "GET", "/states/ks/funfact", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_replaces_by_one_based_index() {
  let state = make_state().await;
  send(
    state.clone(),
    "POST",
    "/states/ks/funfact",
    Some(json!({ "funfacts": ["a", "b"] })),
  )
  .await;

  let body = expect(
    send(
      state,
      "PATCH",
      "/states/ks/funfact",
      Some(json!({ "index": 1, "funfact": "X" })),
    )
    .await,
    StatusCode::OK,
  )
  .await;
  assert_eq!(body["funfacts"], json!(["X", "b"]));
}

#[tokio::test]
async fn delete_removes_by_one_based_index() {
  let state = make_state().await;
  send(
    state.clone(),
    "POST",
    "/states/ks/funfact",
    Some(json!({ "funfacts": ["a", "b", "c"] })),
  )
  .await;

  let body = expect(
    send(state, "DELETE", "/states/ks/funfact", Some(json!({ "index": 2 }))).await,
    StatusCode::OK,
  )
  .await;
  assert_eq!(body["funfacts"], json!(["a", "c"]));
}

#[tokio::test]
async fn out_of_range_index_is_404() {
  let state = make_state().await;
  send(
    state.clone(),
    "POST",
    "/states/ks/funfact",
    Some(json!({ "funfacts": ["a", "b"] })),
  )
  .await;

  let body = expect(
    send(
      state.clone(),
      "PATCH",
      "/states/ks/funfact",
      Some(json!({ "index": 3, "funfact": "X" })),
    )
    .await,
    StatusCode::NOT_FOUND,
  )
  .await;
  assert_eq!(body["message"], "No Fun Fact found at that index for Kansas");

  let body = expect(
    send(state, "DELETE", "/states/ks/funfact", Some(json!({ "index": 3 }))).await,
    StatusCode::NOT_FOUND,
  )
  .await;
  assert_eq!(body["message"], "No Fun Fact found at that index for Kansas");
}

#[tokio::test]
async fn edits_without_record_are_404() {
  let state = make_state().await;
  let body = expect(
    send(state, "DELETE", "/states/wy/funfact", Some(json!({ "index": 1 }))).await,
    StatusCode::NOT_FOUND,
  )
  .await;
  assert_eq!(body["message"], "No Fun Facts found for Wyoming");
}

#[tokio::test]
async fn edit_body_errors_are_400() {
  let state = make_state().await;
  for (method, body, message) in [
    ("PATCH", json!({ "funfact": "X" }), "State fun fact index value required"),
    ("PATCH", json!({ "index": 1 }), "State fun fact value required"),
    (
      "PATCH",
      json!({ "index": "zero", "funfact": "X" }),
      "Invalid index value. Index must be a positive integer.",
    ),
    ("DELETE", json!({}), "State fun fact index value required"),
    (
      "DELETE",
      json!({ "index": -2 }),
      "Invalid index value. Index must be a positive integer.",
    ),
  ] {
    let resp = send(state.clone(), method, "/states/ks/funfact", Some(body)).await;
    let json = expect(resp, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["message"], message, "{method}");
  }
}

#[tokio::test]
async fn malformed_json_is_400() {
  let state = make_state().await;
  let req = Request::builder()
    .method("POST")
    .uri("/states/ks/funfact")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from("{\"funfacts\": ["))
    .unwrap();
  let resp = api_router(state).oneshot(req).await.unwrap();
  let body = expect(resp, StatusCode::BAD_REQUEST).await;
  assert_eq!(body["message"], "Malformed JSON body");
}

#[tokio::test]
async fn create_store_fault_is_500() {
  let state = AppState::new(FailingStore, Dataset::embedded().unwrap());
  let resp = send(
    state,
    "POST",
    "/states/ks/funfact",
    Some(json!({ "funfacts": ["a"] })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unknown_route_is_404() {
  let state = make_state().await;
  let body = expect(send(state, "GET", "/nowhere", None).await, StatusCode::NOT_FOUND).await;
  assert_eq!(body, json!({ "error": "404 Not Found" }));
}
