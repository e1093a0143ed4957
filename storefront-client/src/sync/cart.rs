//! Cart synchronizer

use std::sync::Arc;

use shared::CartLine;

use super::{RejectionPolicy, report_failure};
use crate::api;
use crate::http::HttpGateway;
use crate::store::{CartAction, Store, SyncOp};
use crate::ClientResult;

/// Keeps the cart branch in step with the server's cart
#[derive(Debug)]
pub struct CartSync<G> {
    gateway: Arc<G>,
    store: Store,
    policy: RejectionPolicy,
}

impl<G> Clone for CartSync<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            store: self.store.clone(),
            policy: self.policy,
        }
    }
}

impl<G: HttpGateway> CartSync<G> {
    pub fn new(gateway: Arc<G>, store: Store, policy: RejectionPolicy) -> Self {
        Self {
            gateway,
            store,
            policy,
        }
    }

    pub fn policy(&self) -> RejectionPolicy {
        self.policy
    }

    /// Replace local lines with the server's cart and recompute the sum.
    ///
    /// Leaves state untouched on failure.
    pub async fn fetch_cart(&self) -> ClientResult<()> {
        match api::fetch_cart(self.gateway.as_ref()).await {
            Ok(lines) => {
                tracing::debug!(lines = lines.len(), "cart fetched");
                self.store.dispatch(CartAction::Fetched(lines)).await;
                Ok(())
            }
            Err(e) => Err(report_failure(&self.store, SyncOp::FetchCart, e)),
        }
    }

    /// Send the full line list and commit it once the server accepts it.
    ///
    /// A rejection rolls local lines back according to the
    /// [`RejectionPolicy`] and still returns the error. A transport
    /// failure changes nothing.
    pub async fn update_cart(&self, lines: Vec<CartLine>) -> ClientResult<()> {
        let before = self.store.cart().await.products;

        match api::update_cart(self.gateway.as_ref(), &lines).await {
            Ok(_) => {
                self.store.dispatch(CartAction::Commit(lines)).await;
                Ok(())
            }
            Err(e) if e.is_rejection() => {
                let rolled_back = match self.policy {
                    RejectionPolicy::RestoreSnapshot => before,
                    RejectionPolicy::DropLast => {
                        let mut lines = lines;
                        lines.pop();
                        lines
                    }
                };
                tracing::info!(policy = ?self.policy, lines = rolled_back.len(), "rolling back cart update");
                self.store.dispatch(CartAction::Commit(rolled_back)).await;
                Err(report_failure(&self.store, SyncOp::UpdateCart, e))
            }
            Err(e) => Err(report_failure(&self.store, SyncOp::UpdateCart, e)),
        }
    }

    /// Empty the server's cart. Local state is the caller's business.
    pub async fn clean_cart(&self) -> ClientResult<()> {
        api::clean_cart(self.gateway.as_ref())
            .await
            .map(|_| ())
            .map_err(|e| report_failure(&self.store, SyncOp::CleanCart, e))
    }

    /// Append a line locally, without talking to the server
    pub async fn add_line(&self, line: CartLine) {
        self.store.dispatch(CartAction::Add(line)).await;
    }

    /// Replace all local lines, without talking to the server
    pub async fn set_lines(&self, lines: Vec<CartLine>) {
        self.store.dispatch(CartAction::SetLines(lines)).await;
    }

    /// Reset the local cart
    pub async fn clear(&self) {
        self.store.dispatch(CartAction::Clear).await;
    }
}
