//! Storefront Client - state synchronization for the storefront REST API
//!
//! Keeps cart, catalog, catalog scroll and order history state in one
//! [`Store`], and keeps that store in step with the server through the
//! [`CartSync`], [`OrdersSync`] and [`CatalogSync`] synchronizers.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod store;
pub mod sync;

pub use client::StorefrontClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use crate::http::{HttpGateway, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use crate::http::OneshotHttpClient;
pub use store::{
    Action, Branch, OrdersStorage, Store, StoreConfig, StoreEvent, StoreState, SumBaseline, SyncOp,
};
pub use sync::{CartSync, CatalogSync, OrdersSync, RejectionPolicy};

// Re-export shared types for convenience
pub use shared::{CartLine, Decimal, Order, Page, PageMeta, Product};
