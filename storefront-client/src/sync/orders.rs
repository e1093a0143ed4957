//! Orders synchronizer

use std::sync::Arc;

use super::{CartSync, report_failure};
use crate::api;
use crate::http::HttpGateway;
use crate::store::{OrdersAction, Store, SyncOp};
use crate::ClientResult;

/// Order history pagination and checkout
///
/// The caller picks which page to load next; nothing here prefetches or
/// skips pages on its own. [`OrdersSync::is_visited`] is only a hint.
#[derive(Debug)]
pub struct OrdersSync<G> {
    gateway: Arc<G>,
    store: Store,
    cart: CartSync<G>,
}

impl<G> Clone for OrdersSync<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            store: self.store.clone(),
            cart: self.cart.clone(),
        }
    }
}

impl<G: HttpGateway> OrdersSync<G> {
    pub fn new(gateway: Arc<G>, store: Store, cart: CartSync<G>) -> Self {
        Self {
            gateway,
            store,
            cart,
        }
    }

    /// Load one page and store its envelope per the store's [`OrdersStorage`](crate::store::OrdersStorage)
    pub async fn fetch_page(&self, page: u32, page_size: u32) -> ClientResult<()> {
        match api::fetch_orders_page(self.gateway.as_ref(), page, page_size).await {
            Ok(envelope) => {
                tracing::debug!(page, orders = envelope.len(), total = envelope.total(), "orders page fetched");
                self.store
                    .dispatch(OrdersAction::PageFetched { page, envelope })
                    .await;
                Ok(())
            }
            Err(e) => Err(report_failure(&self.store, SyncOp::FetchOrders, e)),
        }
    }

    /// Check out the server cart.
    ///
    /// On success clears the local cart, then the remote cart, then the
    /// order history, in that order. A failed remote clear is reported but
    /// does not stop the history reset. On failure nothing changes.
    pub async fn submit_order(&self) -> ClientResult<()> {
        if let Err(e) = api::submit_order(self.gateway.as_ref()).await {
            return Err(report_failure(&self.store, SyncOp::SubmitOrder, e));
        }

        tracing::info!("order submitted, clearing cart and order history");
        self.cart.clear().await;
        // Already logged and published by clean_cart
        let _ = self.cart.clean_cart().await;
        self.reset().await;
        Ok(())
    }

    /// Forget every fetched page
    pub async fn reset(&self) {
        self.store.dispatch(OrdersAction::Reset).await;
    }

    pub async fn is_visited(&self, page: u32) -> bool {
        self.store.orders().await.is_visited(page)
    }
}
