//! Order Model

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// One line of a placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: Product,
    #[serde(default)]
    pub quantity: u32,
    /// RFC 3339 timestamp, kept as sent
    #[serde(
        default,
        rename = "createdAt",
        alias = "created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OrderLine {
    pub fn subtotal(&self) -> Decimal {
        self.product.price.unwrap_or(Decimal::ZERO) * Decimal::from(self.quantity)
    }

    pub fn created_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        self.created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    }
}

/// A placed order. The API sends each order as a bare array of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order {
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Creation time of the first line, which is when the order was submitted.
    pub fn placed_at(&self) -> Option<DateTime<FixedOffset>> {
        self.lines.first().and_then(OrderLine::created_at_parsed)
    }
}
