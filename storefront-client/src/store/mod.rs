//! State store
//!
//! One state tree with four independently owned branches. Every change
//! goes through [`Store::dispatch`], which applies a single reducer under
//! the write lock and then announces it on a broadcast channel.
//!
//! The store is a handle, not a global: build one with [`Store::new`] and
//! pass clones to whatever needs to read or dispatch.

mod cart;
mod catalog;
mod orders;
mod scroll;

pub use cart::{CartAction, CartState, SumBaseline};
pub use catalog::{CatalogAction, CatalogState, CatalogUpdate};
pub use orders::{ORDERS_TOTAL_BASELINE, OrdersAction, OrdersState, OrdersStorage};
pub use scroll::{ScrollAction, ScrollState};

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{RwLock, broadcast};

use crate::ClientError;

/// Capacity of the change notification channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Store construction settings
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreConfig {
    pub sum_baseline: SumBaseline,
    pub orders_storage: OrdersStorage,
}

/// The whole state tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreState {
    pub cart: CartState,
    pub catalog: CatalogState,
    pub catalog_scroll: ScrollState,
    pub orders: OrdersState,
}

impl StoreState {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            cart: CartState::new(config.sum_baseline),
            catalog: CatalogState::default(),
            catalog_scroll: ScrollState::default(),
            orders: OrdersState::new(config.orders_storage),
        }
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Cart(a) => self.cart.reduce(a),
            Action::Catalog(a) => self.catalog.reduce(a),
            Action::CatalogScroll(a) => self.catalog_scroll.reduce(a),
            Action::Orders(a) => self.orders.reduce(a),
        }
    }
}

/// Top-level branch of the state tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Cart,
    Catalog,
    CatalogScroll,
    Orders,
}

/// Any mutation, tagged with the branch it belongs to
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Cart(CartAction),
    Catalog(CatalogAction),
    CatalogScroll(ScrollAction),
    Orders(OrdersAction),
}

impl Action {
    pub fn branch(&self) -> Branch {
        match self {
            Self::Cart(_) => Branch::Cart,
            Self::Catalog(_) => Branch::Catalog,
            Self::CatalogScroll(_) => Branch::CatalogScroll,
            Self::Orders(_) => Branch::Orders,
        }
    }
}

impl From<CartAction> for Action {
    fn from(action: CartAction) -> Self {
        Self::Cart(action)
    }
}

impl From<CatalogAction> for Action {
    fn from(action: CatalogAction) -> Self {
        Self::Catalog(action)
    }
}

impl From<ScrollAction> for Action {
    fn from(action: ScrollAction) -> Self {
        Self::CatalogScroll(action)
    }
}

impl From<OrdersAction> for Action {
    fn from(action: OrdersAction) -> Self {
        Self::Orders(action)
    }
}

/// Synchronizing operation, named in failure events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOp {
    FetchCart,
    UpdateCart,
    CleanCart,
    FetchOrders,
    SubmitOrder,
    FetchProducts,
    FetchProduct,
}

impl std::fmt::Display for SyncOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FetchCart => "fetch_cart",
            Self::UpdateCart => "update_cart",
            Self::CleanCart => "clean_cart",
            Self::FetchOrders => "fetch_orders",
            Self::SubmitOrder => "submit_order",
            Self::FetchProducts => "fetch_products",
            Self::FetchProduct => "fetch_product",
        };
        f.write_str(name)
    }
}

/// Notification published to subscribers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A reducer ran on `branch`; `revision` counts every dispatch so far
    Changed { branch: Branch, revision: u64 },
    /// A synchronizing call failed and its outcome was not (fully) applied
    SyncFailed {
        operation: SyncOp,
        status: Option<u16>,
        message: String,
    },
}

#[derive(Debug)]
struct Tree {
    state: StoreState,
    revision: u64,
}

#[derive(Debug)]
struct StoreInner {
    tree: RwLock<Tree>,
    events: broadcast::Sender<StoreEvent>,
}

/// Shared handle to the state tree
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(StoreInner {
                tree: RwLock::new(Tree {
                    state: StoreState::new(&config),
                    revision: 0,
                }),
                events,
            }),
        }
    }

    /// Apply one action and return the new revision
    pub async fn dispatch(&self, action: impl Into<Action>) -> u64 {
        let action = action.into();
        let mut tree = self.inner.tree.write().await;
        self.apply(&mut tree, action)
    }

    /// Build an action from the current state and apply it, atomically.
    ///
    /// For read-modify-write updates that must not lose a concurrent
    /// dispatch in between.
    pub async fn dispatch_with<A, F>(&self, build: F) -> u64
    where
        A: Into<Action>,
        F: FnOnce(&StoreState) -> A,
    {
        let mut tree = self.inner.tree.write().await;
        let action = build(&tree.state).into();
        self.apply(&mut tree, action)
    }

    fn apply(&self, tree: &mut Tree, action: Action) -> u64 {
        let branch = action.branch();
        tree.state.reduce(action);
        tree.revision += 1;
        tracing::trace!(?branch, revision = tree.revision, "state changed");
        // Sent under the lock so subscribers see changes in apply order.
        // No receivers is fine.
        let _ = self.inner.events.send(StoreEvent::Changed {
            branch,
            revision: tree.revision,
        });
        tree.revision
    }

    /// Announce a failed synchronizing call
    pub fn publish_failure(&self, operation: SyncOp, error: &ClientError) {
        let _ = self.inner.events.send(StoreEvent::SyncFailed {
            operation,
            status: error.status(),
            message: error.to_string(),
        });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    /// Clone of the whole tree
    pub async fn snapshot(&self) -> StoreState {
        self.inner.tree.read().await.state.clone()
    }

    pub async fn revision(&self) -> u64 {
        self.inner.tree.read().await.revision
    }

    pub async fn cart(&self) -> CartState {
        self.inner.tree.read().await.state.cart.clone()
    }

    pub async fn catalog(&self) -> CatalogState {
        self.inner.tree.read().await.state.catalog.clone()
    }

    pub async fn catalog_scroll(&self) -> ScrollState {
        self.inner.tree.read().await.state.catalog_scroll
    }

    pub async fn orders(&self) -> OrdersState {
        self.inner.tree.read().await.state.orders.clone()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
