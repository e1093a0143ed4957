//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product as served by `/products` and embedded in cart/order lines.
///
/// Fields the storefront does not model are kept in `extra` so a product
/// received from the server can be stored and re-serialized verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Unit price in currency units
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    /// Image URL
    #[serde(default, alias = "image", skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// 0..=5 stars
    #[serde(default)]
    pub rating: f64,
    /// Only present on some cart payloads; read by the cart's quantity fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    /// Minimal product, mostly useful for building local cart lines.
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            price: Some(price),
            picture: None,
            rating: 0.0,
            quantity: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Width of the filled star bar, in percent.
    pub fn rating_percent(&self) -> f64 {
        (self.rating * 20.0).clamp(0.0, 100.0)
    }

    /// Picture URL, or `fallback` when the product has no usable picture.
    pub fn picture_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.picture.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => fallback,
        }
    }
}
