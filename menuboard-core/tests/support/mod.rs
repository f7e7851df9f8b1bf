//! In-process fake of the menu API for integration tests.
//!
//! Collections are plain JSON objects keyed by their `id`. The server can be
//! told to fail every request or to delay requests carrying a given `name`,
//! and it records the method, path and auth/content headers it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use menuboard_core::{ApiClient, MemoryNotifier, MenuBoard, TokenSource};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Default)]
pub struct ServerState {
    collections: HashMap<String, Vec<Value>>,
    next_id: i64,
    failing: bool,
    delays: HashMap<String, u64>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<ServerState>>;

pub struct FakeApi {
    state: Shared,
    pub base_url: String,
}

impl FakeApi {
    pub async fn spawn() -> Self {
        let state: Shared = Arc::new(Mutex::new(ServerState {
            next_id: 1000,
            ..ServerState::default()
        }));

        let app = Router::new()
            .route("/api/{collection}/", get(list).post(create))
            .route(
                "/api/{collection}/{id}/",
                get(retrieve).put(update).delete(destroy),
            )
            .route("/api/{collection}/{id}/{export}/", get(export))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            state,
            base_url: format!("http://{}", addr),
        }
    }

    pub fn seed(&self, collection: &str, entity: Value) {
        let mut state = self.state.lock().unwrap();
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(entity);
    }

    /// Replaces a whole collection, as if changed by another client.
    pub fn replace(&self, collection: &str, entities: Vec<Value>) {
        let mut state = self.state.lock().unwrap();
        state.collections.insert(collection.to_string(), entities);
    }

    pub fn entities(&self, collection: &str) -> Vec<Value> {
        let state = self.state.lock().unwrap();
        state.collections.get(collection).cloned().unwrap_or_default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    /// Delays any write whose body carries `name` by `millis`.
    pub fn delay_name(&self, name: &str, millis: u64) {
        self.state
            .lock()
            .unwrap()
            .delays
            .insert(name.to_string(), millis);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn client(&self, tokens: Arc<dyn TokenSource>) -> ApiClient {
        ApiClient::new(self.base_url.clone(), tokens)
    }

    pub fn board(&self, tokens: Arc<dyn TokenSource>) -> (MenuBoard, Arc<MemoryNotifier>) {
        let notifier = Arc::new(MemoryNotifier::new());
        let board = MenuBoard::new(self.client(tokens), notifier.clone());
        (board, notifier)
    }
}

fn record(state: &Shared, method: &str, path: String, headers: &HeaderMap) -> bool {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        method: method.to_string(),
        path,
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
    });
    state.failing
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": "boom" })),
    )
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response()
}

async fn delay_for(state: &Shared, body: &Value) {
    let millis = body
        .get("name")
        .and_then(Value::as_str)
        .and_then(|name| state.lock().unwrap().delays.get(name).copied());
    if let Some(millis) = millis {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}

/// Fills in fields the real API always returns.
fn with_server_fields(collection: &str, mut body: Value, id: i64) -> Value {
    if let Some(object) = body.as_object_mut() {
        object.insert("id".to_string(), json!(id));
        let nullable = match collection {
            "restaurants" => Some("logo"),
            "menu-items" => Some("image"),
            _ => None,
        };
        if let Some(field) = nullable {
            object.entry(field.to_string()).or_insert(Value::Null);
        }
    }
    body
}

async fn list(
    State(state): State<Shared>,
    Path(collection): Path<String>,
    headers: HeaderMap,
) -> Response {
    if record(&state, "GET", format!("/api/{}/", collection), &headers) {
        return server_error();
    }
    let state = state.lock().unwrap();
    let entities = state.collections.get(&collection).cloned().unwrap_or_default();
    Json(Value::Array(entities)).into_response()
}

async fn create(
    State(state): State<Shared>,
    Path(collection): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if record(&state, "POST", format!("/api/{}/", collection), &headers) {
        return server_error();
    }
    delay_for(&state, &body).await;

    let mut state = state.lock().unwrap();
    state.next_id += 1;
    let id = state.next_id;
    let created = with_server_fields(&collection, body, id);
    state
        .collections
        .entry(collection)
        .or_default()
        .push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn retrieve(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Response {
    if record(&state, "GET", format!("/api/{}/{}/", collection, id), &headers) {
        return server_error();
    }
    let state = state.lock().unwrap();
    state
        .collections
        .get(&collection)
        .and_then(|entities| entities.iter().find(|e| e["id"] == json!(id)))
        .map(|entity| Json(entity.clone()).into_response())
        .unwrap_or_else(not_found)
}

async fn update(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, i64)>,
    request: Request,
) -> Response {
    let headers = request.headers().clone();
    if record(&state, "PUT", format!("/api/{}/{}/", collection, id), &headers) {
        return server_error();
    }

    let is_multipart = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    let body = if is_multipart {
        let mut multipart = match Multipart::from_request(request, &state).await {
            Ok(multipart) => multipart,
            Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        };
        let mut object = serde_json::Map::new();
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().unwrap_or_default().to_string();
            if let Some(file_name) = field.file_name().map(str::to_string) {
                let _ = field.bytes().await;
                object.insert(name, json!(format!("/media/{}", file_name)));
            } else {
                let text = field.text().await.unwrap_or_default();
                let value = match name.as_str() {
                    "category" | "restaurant" => text.parse::<i64>().map(Value::from).unwrap_or(json!(text)),
                    _ => json!(text),
                };
                object.insert(name, value);
            }
        }
        Value::Object(object)
    } else {
        match Json::<Value>::from_request(request, &state).await {
            Ok(Json(body)) => body,
            Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        }
    };

    delay_for(&state, &body).await;

    let mut state = state.lock().unwrap();
    let Some(entities) = state.collections.get_mut(&collection) else {
        return not_found();
    };
    let Some(slot) = entities.iter_mut().find(|e| e["id"] == json!(id)) else {
        return not_found();
    };

    // Fields not sent keep their stored value, as a partial form post would.
    let mut merged = slot.clone();
    if let (Some(target), Some(source)) = (merged.as_object_mut(), body.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    let updated = with_server_fields(&collection, merged, id);
    *slot = updated.clone();
    Json(updated).into_response()
}

async fn destroy(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Response {
    if record(&state, "DELETE", format!("/api/{}/{}/", collection, id), &headers) {
        return server_error();
    }
    let mut state = state.lock().unwrap();
    let Some(entities) = state.collections.get_mut(&collection) else {
        return not_found();
    };
    let before = entities.len();
    entities.retain(|e| e["id"] != json!(id));
    if entities.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn export(
    State(state): State<Shared>,
    Path((collection, id, export)): Path<(String, i64, String)>,
    headers: HeaderMap,
) -> Response {
    if record(
        &state,
        "GET",
        format!("/api/{}/{}/{}/", collection, id, export),
        &headers,
    ) {
        return server_error();
    }
    if collection != "restaurants" {
        return not_found();
    }
    match export.as_str() {
        "menu_pdf" => (
            [(header::CONTENT_TYPE, "application/pdf")],
            format!("%PDF-1.4 menu {}", id).into_bytes(),
        )
            .into_response(),
        "menu_qr" => (
            [(header::CONTENT_TYPE, "image/png")],
            vec![0x89, b'P', b'N', b'G'],
        )
            .into_response(),
        _ => not_found(),
    }
}
