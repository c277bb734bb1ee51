//! In-process stand-in for the catalog API, shared by the server tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Requests seen by the detail endpoint.
#[derive(Clone, Default)]
pub struct Hits {
    detail: Arc<AtomicUsize>,
}

impl Hits {
    pub fn detail(&self) -> usize {
        self.detail.load(Ordering::SeqCst)
    }
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// `/pokemon`, `/pokemon/{id}` and an unrelated `/berry/{id}` resource that
/// also has an `id` and a `name`.
pub fn catalog(hits: Hits) -> Router {
    Router::new()
        .route("/pokemon", get(list_handler))
        .route("/pokemon/{id}", get(detail_handler))
        .route("/berry/{id}", get(berry_handler))
        .with_state(hits)
}

async fn list_handler(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let limit: usize = query["limit"].parse().unwrap();
    let offset: usize = query["offset"].parse().unwrap();
    let results: Vec<Value> = ["bulbasaur", "ivysaur", "venusaur"]
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(i, name)| {
            json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1) })
        })
        .collect();
    Json(json!({ "count": 3, "next": null, "previous": null, "results": results }))
}

async fn detail_handler(
    State(hits): State<Hits>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    hits.detail.fetch_add(1, Ordering::SeqCst);
    match id.as_str() {
        "25" | "pikachu" => Ok(Json(json!({
            "id": 25,
            "name": "pikachu",
            "sprites": { "front_default": "https://img/25.png", "other": {} },
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "" } }]
        }))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn berry_handler(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({ "id": 1, "name": "cheri-berry", "growth_time": 3 }))
}
