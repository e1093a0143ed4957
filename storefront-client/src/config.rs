//! Client configuration

use std::path::PathBuf;

use crate::error::{ClientError, ClientResult};
use crate::store::{OrdersStorage, StoreConfig, SumBaseline};
use crate::sync::RejectionPolicy;

/// Origin of the public storefront API
pub const DEFAULT_BASE_URL: &str = "https://skillfactory-task.detmir.team";

/// Client configuration for talking to the storefront API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://shop.example.com")
    pub base_url: String,

    /// Request timeout in seconds. `None` leaves it to the transport.
    pub timeout: Option<u64>,

    /// Opaque session cookie (`name=value` pairs separated by `;`) seeded
    /// into the cookie jar, so it is sent alongside the cookies the server
    /// sets itself
    pub cookie: Option<String>,

    /// What a rejected cart update does to local state
    pub rejection_policy: RejectionPolicy,

    /// Where the cart sum starts counting from
    pub sum_baseline: SumBaseline,

    /// Whether re-fetched order pages replace or stack up
    pub orders_storage: OrdersStorage,

    /// Directory for daily rolling log files (console only when unset)
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            cookie: None,
            rejection_policy: RejectionPolicy::default(),
            sum_baseline: SumBaseline::default(),
            orders_storage: OrdersStorage::default(),
            log_dir: None,
        }
    }

    /// Read configuration from `STOREFRONT_*` environment variables
    pub fn from_env() -> ClientResult<Self> {
        let mut config = Self::new(
            std::env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        );

        if let Ok(raw) = std::env::var("STOREFRONT_TIMEOUT_SECS") {
            let secs = raw
                .parse()
                .map_err(|_| ClientError::Config(format!("STOREFRONT_TIMEOUT_SECS: {raw:?}")))?;
            config.timeout = Some(secs);
        }
        config.cookie = std::env::var("STOREFRONT_COOKIE").ok();
        if let Ok(raw) = std::env::var("STOREFRONT_CART_ROLLBACK") {
            config.rejection_policy = raw.parse()?;
        }
        if let Ok(raw) = std::env::var("STOREFRONT_SUM_BASELINE") {
            config.sum_baseline = raw.parse()?;
        }
        if let Ok(raw) = std::env::var("STOREFRONT_ORDERS_STORAGE") {
            config.orders_storage = raw.parse()?;
        }
        config.log_dir = std::env::var("STOREFRONT_LOG_DIR").ok().map(PathBuf::from);

        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the session cookie
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn with_rejection_policy(mut self, policy: RejectionPolicy) -> Self {
        self.rejection_policy = policy;
        self
    }

    pub fn with_sum_baseline(mut self, baseline: SumBaseline) -> Self {
        self.sum_baseline = baseline;
        self
    }

    pub fn with_orders_storage(mut self, storage: OrdersStorage) -> Self {
        self.orders_storage = storage;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Store settings derived from this configuration
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            sum_baseline: self.sum_baseline,
            orders_storage: self.orders_storage,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
