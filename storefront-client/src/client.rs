//! Storefront client - composition root
//!
//! Owns one gateway and one store, and hands out synchronizers that share
//! both. Build it once at startup and pass it (or its store) down.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::http::{HttpGateway, NetworkHttpClient};
use crate::store::{Store, StoreConfig};
use crate::sync::{CartSync, CatalogSync, OrdersSync, RejectionPolicy};
use crate::ClientResult;

/// Gateway + store + synchronizers
///
/// # Example
///
/// ```no_run
/// use storefront_client::{ClientConfig, StorefrontClient};
///
/// # async fn example() -> Result<(), storefront_client::ClientError> {
/// let client = StorefrontClient::connect(&ClientConfig::from_env()?)?;
///
/// client.cart().fetch_cart().await?;
/// client.orders().fetch_page(1, 10).await?;
///
/// let state = client.store().snapshot().await;
/// println!("{} lines, sum {}", state.cart.products.len(), state.cart.sum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StorefrontClient<G = NetworkHttpClient> {
    gateway: Arc<G>,
    store: Store,
    policy: RejectionPolicy,
}

impl<G> Clone for StorefrontClient<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            store: self.store.clone(),
            policy: self.policy,
        }
    }
}

impl StorefrontClient<NetworkHttpClient> {
    /// Network client for `config.base_url`
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let gateway = NetworkHttpClient::new(config)?;
        tracing::info!(base_url = gateway.base_url(), "storefront client ready");
        Ok(Self::with_gateway(
            gateway,
            config.store_config(),
            config.rejection_policy,
        ))
    }
}

impl<G: HttpGateway> StorefrontClient<G> {
    /// Client over any gateway, with a fresh store
    pub fn with_gateway(gateway: G, store_config: StoreConfig, policy: RejectionPolicy) -> Self {
        Self::with_store(Arc::new(gateway), Store::new(store_config), policy)
    }

    /// Client over an existing gateway and store
    pub fn with_store(gateway: Arc<G>, store: Store, policy: RejectionPolicy) -> Self {
        Self {
            gateway,
            store,
            policy,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn cart(&self) -> CartSync<G> {
        CartSync::new(self.gateway.clone(), self.store.clone(), self.policy)
    }

    pub fn orders(&self) -> OrdersSync<G> {
        OrdersSync::new(self.gateway.clone(), self.store.clone(), self.cart())
    }

    pub fn catalog(&self) -> CatalogSync<G> {
        CatalogSync::new(self.gateway.clone(), self.store.clone())
    }
}
