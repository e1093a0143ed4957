//! Cart Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// One cart line: a product plus how many of it.
///
/// The server may put `price`/`quantity` either on the line itself or on
/// the nested product. Readers go through [`CartLine::unit_price`] and
/// [`CartLine::resolved_quantity`], which check the flat field first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity: Some(quantity),
            price: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Flat `price`, else `product.price`, else zero.
    pub fn unit_price(&self) -> Decimal {
        match self.price.or(self.product.price) {
            Some(price) => price,
            None => {
                tracing::warn!(product_id = %self.product.id, "cart line has no price, counting as 0");
                Decimal::ZERO
            }
        }
    }

    /// Flat `quantity`, else `product.quantity`, else zero.
    pub fn resolved_quantity(&self) -> u32 {
        match self.quantity.or(self.product.quantity) {
            Some(quantity) => quantity,
            None => {
                tracing::warn!(product_id = %self.product.id, "cart line has no quantity, counting as 0");
                0
            }
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.resolved_quantity())
    }
}

/// Sum of line subtotals on top of `baseline`.
pub fn cart_total(lines: &[CartLine], baseline: Decimal) -> Decimal {
    lines.iter().fold(baseline, |sum, line| sum + line.subtotal())
}

/// `{id, quantity}` reference sent to `/cart/update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemRef {
    pub id: String,
    pub quantity: u32,
}

/// Body of `POST /cart/update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartUpdateRequest {
    pub data: Vec<CartItemRef>,
}

impl CartUpdateRequest {
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            data: lines
                .iter()
                .map(|line| CartItemRef {
                    id: line.product.id.clone(),
                    quantity: line.resolved_quantity(),
                })
                .collect(),
        }
    }

    /// Clears the remote cart.
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }
}
