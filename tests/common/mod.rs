//! In-process fake of the Foody API for integration tests
//!
//! Serves the four endpoints on 127.0.0.1 with an in-memory store and the
//! same status codes and messages as the real service.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use foody::Config;

pub const TEST_TOKEN: &str = "test-token";

/// Knobs for simulating a misbehaving service
#[derive(Clone)]
pub struct Behavior {
    pub edit_message: String,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            edit_message: "Successfully edited".to_string(),
        }
    }
}

/// A request as seen by the fake
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Default)]
struct Store {
    foods: BTreeMap<String, Value>,
    next_id: u64,
    requests: Vec<Recorded>,
}

struct Shared {
    behavior: Behavior,
    store: Mutex<Store>,
}

type AppState = Arc<Shared>;

/// Running fake server; stopped on drop
pub struct FakeApi {
    pub base_url: String,
    shared: AppState,
    handle: JoinHandle<()>,
}

impl FakeApi {
    pub async fn start() -> Self {
        Self::start_with(Behavior::default()).await
    }

    pub async fn start_with(behavior: Behavior) -> Self {
        let shared = Arc::new(Shared {
            behavior,
            store: Mutex::new(Store::default()),
        });

        let app = Router::new()
            .route("/api/Food/Create", post(create_food))
            .route("/api/Food/Edit/{id}", patch(edit_food))
            .route("/api/Food/All", get(list_foods))
            .route("/api/Food/Delete/{id}", delete(delete_food))
            .with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake API");
        let addr = listener.local_addr().expect("Fake API has no local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake API stopped");
        });

        Self {
            base_url: format!("http://{}", addr),
            shared,
            handle,
        }
    }

    /// Config pointing at this server with the accepted token
    pub fn config(&self) -> Config {
        Config::default().with_overrides(Some(self.base_url.clone()), Some(TEST_TOKEN.to_string()))
    }

    pub fn food_count(&self) -> usize {
        self.shared.store.lock().unwrap().foods.len()
    }

    pub fn food(&self, id: &str) -> Option<Value> {
        self.shared.store.lock().unwrap().foods.get(id).cloned()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.store.lock().unwrap().requests.clone()
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Record the request and check the bearer token
fn admit(
    state: &Shared,
    method: &'static str,
    path: String,
    headers: &HeaderMap,
) -> Result<(), (StatusCode, Json<Value>)> {
    let authorization = header_str(headers, header::AUTHORIZATION);
    let user_agent = header_str(headers, header::USER_AGENT);
    let expected = format!("Bearer {}", TEST_TOKEN);
    let authorized = authorization.as_deref() == Some(expected.as_str());

    state.store.lock().unwrap().requests.push(Recorded {
        method,
        path,
        authorization,
        user_agent,
    });

    if authorized {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, Json(json!({ "msg": "Unauthorized" }))))
    }
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn create_food(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Err(rejection) = admit(&state, "POST", "/api/Food/Create".into(), &headers) {
        return rejection;
    }

    let name = body["name"].as_str().unwrap_or_default();
    let description = body["description"].as_str().unwrap_or_default();
    if name.is_empty() || description.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "One or more validation errors occurred." })),
        );
    }

    let mut store = state.store.lock().unwrap();
    store.next_id += 1;
    let id = format!("food-{}", store.next_id);
    store.foods.insert(
        id.clone(),
        json!({
            "id": id,
            "name": name,
            "description": description,
            "url": body["url"].as_str().unwrap_or_default(),
        }),
    );

    (
        StatusCode::CREATED,
        Json(json!({ "foodId": id, "msg": "Successfully created!" })),
    )
}

async fn edit_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(ops): Json<Vec<Value>>,
) -> (StatusCode, Json<Value>) {
    if let Err(rejection) = admit(&state, "PATCH", format!("/api/Food/Edit/{}", id), &headers) {
        return rejection;
    }

    let mut store = state.store.lock().unwrap();
    let Some(food) = store.foods.get_mut(&id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "msg": "No food revues..." })),
        );
    };

    for op in &ops {
        if op["op"] == "replace" {
            if let (Some(field), Some(value)) = (
                op["path"].as_str().and_then(|p| p.strip_prefix('/')),
                op["value"].as_str(),
            ) {
                food[field] = json!(value);
            }
        }
    }

    (
        StatusCode::OK,
        Json(json!({ "msg": state.behavior.edit_message })),
    )
}

async fn list_foods(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if let Err(rejection) = admit(&state, "GET", "/api/Food/All".into(), &headers) {
        return rejection;
    }

    let store = state.store.lock().unwrap();
    let foods: Vec<Value> = store.foods.values().cloned().collect();
    (StatusCode::OK, Json(Value::Array(foods)))
}

async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if let Err(rejection) = admit(&state, "DELETE", format!("/api/Food/Delete/{}", id), &headers) {
        return rejection;
    }

    let mut store = state.store.lock().unwrap();
    if store.foods.remove(&id).is_some() {
        (
            StatusCode::OK,
            Json(json!({ "msg": "Deleted successfully!" })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "Unable to delete this food revue!" })),
        )
    }
}
