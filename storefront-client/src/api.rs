//! Typed storefront endpoints
//!
//! Thin wrappers that pin each REST call to its path and payload shape.
//! They never touch the store; the synchronizers decide what a response
//! means for local state.

use serde_json::Value;
use shared::{CartLine, CartUpdateRequest, Order, Page, Product};

use crate::ClientResult;
use crate::http::HttpGateway;

pub const CART_PATH: &str = "/cart";
pub const CART_UPDATE_PATH: &str = "/cart/update";
pub const CART_SUBMIT_PATH: &str = "/cart/submit";
pub const ORDERS_PATH: &str = "/orders";
pub const PRODUCTS_PATH: &str = "/products";

/// `GET /cart`
pub async fn fetch_cart<G: HttpGateway>(gateway: &G) -> ClientResult<Vec<CartLine>> {
    gateway.get(CART_PATH).await
}

/// `POST /cart/update` with `{data: [{id, quantity}, ...]}`
pub async fn update_cart<G: HttpGateway>(gateway: &G, lines: &[CartLine]) -> ClientResult<Value> {
    gateway
        .post(CART_UPDATE_PATH, &CartUpdateRequest::from_lines(lines))
        .await
}

/// `POST /cart/update` with an empty list
pub async fn clean_cart<G: HttpGateway>(gateway: &G) -> ClientResult<Value> {
    gateway
        .post(CART_UPDATE_PATH, &CartUpdateRequest::empty())
        .await
}

/// `POST /cart/submit` (no body)
pub async fn submit_order<G: HttpGateway>(gateway: &G) -> ClientResult<Value> {
    gateway.post_empty(CART_SUBMIT_PATH).await
}

/// `GET /orders?page=P&limit=L`
pub async fn fetch_orders_page<G: HttpGateway>(
    gateway: &G,
    page: u32,
    limit: u32,
) -> ClientResult<Page<Order>> {
    gateway
        .get(&format!("{ORDERS_PATH}?page={page}&limit={limit}"))
        .await
}

/// `GET /products?page=P&limit=L`
pub async fn fetch_products_page<G: HttpGateway>(
    gateway: &G,
    page: u32,
    limit: u32,
) -> ClientResult<Page<Product>> {
    gateway
        .get(&format!("{PRODUCTS_PATH}?page={page}&limit={limit}"))
        .await
}

/// `GET /products/{id}`
pub async fn fetch_product<G: HttpGateway>(gateway: &G, id: &str) -> ClientResult<Product> {
    gateway.get(&format!("{PRODUCTS_PATH}/{id}")).await
}
