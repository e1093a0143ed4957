//! Shared types for the storefront
//!
//! Product, cart and order models plus the paginated response envelope
//! used by the storefront REST API.

pub mod models;
pub mod response;

// Re-exports
pub use models::{
    CartItemRef, CartLine, CartUpdateRequest, Order, OrderLine, Product, cart_total,
};
pub use response::{Page, PageMeta};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
