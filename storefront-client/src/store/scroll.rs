//! Catalog page scroll slice

use serde::Serialize;

/// Remembered vertical offset of the catalog page
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollState {
    pub offset: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAction {
    Remember(Option<f64>),
}

impl ScrollState {
    pub fn reduce(&mut self, action: ScrollAction) {
        match action {
            ScrollAction::Remember(offset) => self.offset = offset,
        }
    }
}
