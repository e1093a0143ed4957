//! Orders slice

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::{Order, Page};

use crate::ClientError;

/// `total` before any page has been fetched, and after a reset
pub const ORDERS_TOTAL_BASELINE: u64 = 1;

/// How fetched envelopes are kept.
///
/// `ReplacePage` keeps one envelope per page number, so fetching a page
/// again refreshes it. `Append` keeps every envelope in arrival order,
/// duplicates included, and leaves it to callers to check
/// [`OrdersState::is_visited`] before fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrdersStorage {
    #[default]
    ReplacePage,
    Append,
}

impl FromStr for OrdersStorage {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" | "replace-page" | "by-page" => Ok(Self::ReplacePage),
            "append" => Ok(Self::Append),
            other => Err(ClientError::Config(format!(
                "unknown orders storage: {other:?}"
            ))),
        }
    }
}

/// Paginated order history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrdersState {
    /// `(page, envelope)` pairs. Sorted by page under `ReplacePage`,
    /// arrival order under `Append`.
    pub pages: Vec<(u32, Page<Order>)>,
    /// Server-side order count from the last applied page
    pub total: u64,
    pub visited_pages: BTreeSet<u32>,
    #[serde(skip)]
    storage: OrdersStorage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrdersAction {
    PageFetched { page: u32, envelope: Page<Order> },
    Reset,
}

impl OrdersState {
    pub fn new(storage: OrdersStorage) -> Self {
        Self {
            pages: Vec::new(),
            total: ORDERS_TOTAL_BASELINE,
            visited_pages: BTreeSet::new(),
            storage,
        }
    }

    pub fn storage(&self) -> OrdersStorage {
        self.storage
    }

    pub fn is_visited(&self, page: u32) -> bool {
        self.visited_pages.contains(&page)
    }

    /// Most recent envelope stored for `page`
    pub fn page(&self, page: u32) -> Option<&Page<Order>> {
        self.pages
            .iter()
            .rev()
            .find(|(number, _)| *number == page)
            .map(|(_, envelope)| envelope)
    }

    /// All stored orders, envelope by envelope
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.pages.iter().flat_map(|(_, page)| page.data.iter())
    }

    pub fn reduce(&mut self, action: OrdersAction) {
        match action {
            OrdersAction::PageFetched { page, envelope } => {
                self.total = envelope.meta.total;
                match self.storage {
                    OrdersStorage::Append => self.pages.push((page, envelope)),
                    OrdersStorage::ReplacePage => {
                        match self.pages.binary_search_by_key(&page, |(number, _)| *number) {
                            Ok(i) => self.pages[i].1 = envelope,
                            Err(i) => self.pages.insert(i, (page, envelope)),
                        }
                    }
                }
                self.visited_pages.insert(page);
            }
            OrdersAction::Reset => {
                self.pages.clear();
                self.total = ORDERS_TOTAL_BASELINE;
                self.visited_pages.clear();
            }
        }
    }
}

impl Default for OrdersState {
    fn default() -> Self {
        Self::new(OrdersStorage::default())
    }
}
