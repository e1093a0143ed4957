// storefront-client/tests/common/mod.rs
// In-process fake of the storefront API

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use storefront_client::{
    OneshotHttpClient, OrdersStorage, RejectionPolicy, StoreConfig, StorefrontClient, SumBaseline,
};

/// Mutable server-side state, inspectable from tests
#[derive(Debug, Default)]
pub struct FakeState {
    /// Lines served by `GET /cart`
    pub cart: Vec<Value>,
    /// Bodies received by `POST /cart/update`
    pub updates: Vec<Value>,
    /// Status for non-empty cart updates, when they should be rejected
    pub reject_update: Option<u16>,
    /// Status for every cart update, including the empty one
    pub reject_clean: Option<u16>,
    pub reject_submit: bool,
    pub submits: usize,
    pub fail_cart: bool,
    pub fail_orders: bool,
    pub fail_products: bool,
    pub orders: Vec<Value>,
    pub products: Vec<Value>,
}

pub type SharedState = Arc<Mutex<FakeState>>;

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: u32,
    limit: u32,
}

fn page_of(items: &[Value], query: &PageQuery) -> Value {
    let start = (u64::from(query.page.saturating_sub(1)) * u64::from(query.limit)) as usize;
    let data: Vec<Value> = items
        .iter()
        .skip(start)
        .take(query.limit as usize)
        .cloned()
        .collect();
    json!({
        "meta": {"count": data.len(), "total": items.len()},
        "data": data
    })
}

fn error(status: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"error": message}))).into_response()
}

async fn get_cart(State(state): State<SharedState>) -> Response {
    let state = state.lock().unwrap();
    if state.fail_cart {
        return error(500, "cart unavailable");
    }
    Json(Value::Array(state.cart.clone())).into_response()
}

async fn update_cart(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().unwrap();
    state.updates.push(body.clone());

    let is_empty = body["data"].as_array().is_some_and(Vec::is_empty);
    if let Some(status) = state.reject_clean {
        return error(status, "cart locked");
    }
    if let (Some(status), false) = (state.reject_update, is_empty) {
        return error(status, "quantity not available");
    }
    if is_empty {
        state.cart.clear();
    }
    Json(json!({"data": body["data"]})).into_response()
}

async fn submit(State(state): State<SharedState>) -> Response {
    let mut state = state.lock().unwrap();
    if state.reject_submit {
        return error(400, "cart is empty");
    }
    state.submits += 1;
    let order = Value::Array(state.cart.clone());
    state.orders.insert(0, order);
    Json(json!({"success": true})).into_response()
}

async fn get_orders(State(state): State<SharedState>, Query(query): Query<PageQuery>) -> Response {
    let state = state.lock().unwrap();
    if state.fail_orders {
        return error(503, "orders unavailable");
    }
    Json(page_of(&state.orders, &query)).into_response()
}

async fn get_products(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.lock().unwrap();
    if state.fail_products {
        return error(503, "catalog unavailable");
    }
    Json(page_of(&state.products, &query)).into_response()
}

async fn get_product(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.lock().unwrap();
    match state.products.iter().find(|p| p["id"] == id.as_str()) {
        Some(product) => Json(product.clone()).into_response(),
        None => error(404, "product not found"),
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/cart", get(get_cart))
        .route("/cart/update", post(update_cart))
        .route("/cart/submit", post(submit))
        .route("/orders", get(get_orders))
        .route("/products", get(get_products))
        .route("/products/{id}", get(get_product))
        .with_state(state)
}

/// Fake server state plus a client wired to it in-process
pub struct Harness {
    pub server: SharedState,
    pub client: StorefrontClient<OneshotHttpClient>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(SumBaseline::Zero, RejectionPolicy::RestoreSnapshot)
    }

    pub fn with(sum_baseline: SumBaseline, policy: RejectionPolicy) -> Self {
        let store_config = StoreConfig {
            sum_baseline,
            ..StoreConfig::default()
        };
        Self::with_config(store_config, policy)
    }

    pub fn with_orders_storage(orders_storage: OrdersStorage) -> Self {
        let store_config = StoreConfig {
            orders_storage,
            ..StoreConfig::default()
        };
        Self::with_config(store_config, RejectionPolicy::default())
    }

    pub fn with_config(store_config: StoreConfig, policy: RejectionPolicy) -> Self {
        let server = SharedState::default();
        let gateway = OneshotHttpClient::new(router(server.clone()));
        let client = StorefrontClient::with_gateway(gateway, store_config, policy);
        Self { server, client }
    }

    pub fn server(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.server.lock().unwrap()
    }
}

pub fn product(id: &str, price: f64) -> Value {
    json!({
        "id": id,
        "title": format!("Product {id}"),
        "description": "",
        "category": "toys",
        "price": price,
        "picture": format!("https://cdn.example.com/{id}.png"),
        "rating": 4.0
    })
}

pub fn cart_line(id: &str, price: f64, quantity: u32) -> Value {
    json!({"product": product(id, price), "quantity": quantity})
}

pub fn order(lines: &[(&str, f64, u32)]) -> Value {
    Value::Array(
        lines
            .iter()
            .map(|(id, price, quantity)| {
                json!({
                    "product": product(id, *price),
                    "quantity": quantity,
                    "createdAt": "2024-05-01T12:00:00Z"
                })
            })
            .collect(),
    )
}
