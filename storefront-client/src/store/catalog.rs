//! Catalog slice
//!
//! Pure storage: whoever fetches products hands the whole listing over
//! in one [`CatalogUpdate`].

use serde::Serialize;
use shared::Product;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogState {
    pub products: Vec<Product>,
    /// Next page to request (1-based)
    pub page_number: u32,
    pub fetching: bool,
    pub total_products: u64,
}

/// Replacement for every catalog field at once
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogUpdate {
    pub products: Vec<Product>,
    pub page_number: u32,
    pub fetching: bool,
    pub total_products: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    Replace(CatalogUpdate),
}

impl CatalogState {
    /// More products exist on the server than are loaded locally
    pub fn has_more(&self) -> bool {
        (self.products.len() as u64) < self.total_products
    }

    /// Current values, ready to be tweaked into the next update
    pub fn to_update(&self) -> CatalogUpdate {
        CatalogUpdate {
            products: self.products.clone(),
            page_number: self.page_number,
            fetching: self.fetching,
            total_products: self.total_products,
        }
    }

    pub fn reduce(&mut self, action: CatalogAction) {
        match action {
            CatalogAction::Replace(update) => {
                self.products = update.products;
                self.page_number = update.page_number;
                self.fetching = update.fetching;
                self.total_products = update.total_products;
            }
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            page_number: 1,
            fetching: true,
            total_products: 0,
        }
    }
}
