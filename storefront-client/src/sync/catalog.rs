//! Catalog loader
//!
//! The catalog slice only stores what it is given; this is the piece that
//! fetches product pages and hands the slice a complete replacement.

use std::sync::Arc;

use shared::Product;

use super::report_failure;
use crate::api;
use crate::http::HttpGateway;
use crate::store::{CatalogAction, CatalogUpdate, ScrollAction, Store, SyncOp};
use crate::ClientResult;

#[derive(Debug)]
pub struct CatalogSync<G> {
    gateway: Arc<G>,
    store: Store,
}

impl<G> Clone for CatalogSync<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            store: self.store.clone(),
        }
    }
}

impl<G: HttpGateway> CatalogSync<G> {
    pub fn new(gateway: Arc<G>, store: Store) -> Self {
        Self { gateway, store }
    }

    /// Load `page` and append it to the listing (page 1 starts over).
    ///
    /// `fetching` is raised for the duration of the request. On success
    /// the cursor moves to `page + 1` (saturating); on failure only
    /// `fetching` drops.
    pub async fn load_page(&self, page: u32, limit: u32) -> ClientResult<()> {
        self.store
            .dispatch_with(|state| {
                let mut update = state.catalog.to_update();
                update.fetching = true;
                CatalogAction::Replace(update)
            })
            .await;

        match api::fetch_products_page(self.gateway.as_ref(), page, limit).await {
            Ok(envelope) => {
                tracing::debug!(page, products = envelope.len(), total = envelope.total(), "products page fetched");
                self.store
                    .dispatch_with(move |state| {
                        let mut products = if page <= 1 {
                            Vec::new()
                        } else {
                            state.catalog.products.clone()
                        };
                        let total_products = envelope.total();
                        products.extend(envelope.data);
                        CatalogAction::Replace(CatalogUpdate {
                            products,
                            page_number: page.saturating_add(1),
                            fetching: false,
                            total_products,
                        })
                    })
                    .await;
                Ok(())
            }
            Err(e) => {
                self.store
                    .dispatch_with(|state| {
                        let mut update = state.catalog.to_update();
                        update.fetching = false;
                        CatalogAction::Replace(update)
                    })
                    .await;
                Err(report_failure(&self.store, SyncOp::FetchProducts, e))
            }
        }
    }

    /// Load the page the cursor points at
    pub async fn load_next_page(&self, limit: u32) -> ClientResult<()> {
        let page = self.store.catalog().await.page_number;
        self.load_page(page, limit).await
    }

    /// Product detail, for navigation by id. Does not touch the store.
    pub async fn product(&self, id: &str) -> ClientResult<Product> {
        api::fetch_product(self.gateway.as_ref(), id)
            .await
            .map_err(|e| report_failure(&self.store, SyncOp::FetchProduct, e))
    }

    /// Remember where the catalog page was scrolled to
    pub async fn remember_scroll(&self, offset: Option<f64>) {
        self.store.dispatch(ScrollAction::Remember(offset)).await;
    }
}
