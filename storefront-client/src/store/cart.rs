//! Cart slice

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{CartLine, cart_total};

use crate::ClientError;

/// Where the cart sum starts counting from.
///
/// `Zero` applies a baseline of 0 on every path, so `sum` is always the
/// plain sum of line subtotals. `Legacy` keeps the historical values: the
/// empty cart, `SetLines` and `Clear` start at 1 and only a server fetch
/// starts at 0. Whether that 1 was meant as a "not loaded yet" marker has
/// never been settled, so it stays selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SumBaseline {
    #[default]
    Zero,
    Legacy,
}

impl SumBaseline {
    /// Baseline for the empty cart and for locally computed totals
    pub fn local(self) -> Decimal {
        match self {
            Self::Zero => Decimal::ZERO,
            Self::Legacy => Decimal::ONE,
        }
    }

    /// Baseline for totals computed from a server fetch
    pub fn fetched(self) -> Decimal {
        Decimal::ZERO
    }
}

impl FromStr for SumBaseline {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "0" => Ok(Self::Zero),
            "legacy" | "1" => Ok(Self::Legacy),
            other => Err(ClientError::Config(format!("unknown sum baseline: {other:?}"))),
        }
    }
}

/// Cart contents in display order plus the running total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartState {
    pub products: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub sum: Decimal,
    #[serde(skip)]
    baseline: SumBaseline,
}

/// Cart mutations
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Server copy of the cart; replaces lines and recomputes `sum`
    Fetched(Vec<CartLine>),
    /// Lines acknowledged (or rolled back) after a cart update
    Commit(Vec<CartLine>),
    /// Append one line locally
    Add(CartLine),
    /// Replace all lines locally
    SetLines(Vec<CartLine>),
    Clear,
}

impl CartState {
    pub fn new(baseline: SumBaseline) -> Self {
        Self {
            products: Vec::new(),
            sum: baseline.local(),
            baseline,
        }
    }

    pub fn baseline(&self) -> SumBaseline {
        self.baseline
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.products.iter().map(CartLine::resolved_quantity).sum()
    }

    pub fn reduce(&mut self, action: CartAction) {
        match action {
            CartAction::Fetched(lines) => {
                self.sum = cart_total(&lines, self.baseline.fetched());
                self.products = lines;
            }
            CartAction::Commit(lines) | CartAction::SetLines(lines) => {
                self.sum = cart_total(&lines, self.baseline.local());
                self.products = lines;
            }
            CartAction::Add(line) => {
                self.sum += match self.baseline {
                    SumBaseline::Zero => line.subtotal(),
                    SumBaseline::Legacy => line.unit_price(),
                };
                self.products.push(line);
            }
            CartAction::Clear => {
                self.products.clear();
                self.sum = self.baseline.local();
            }
        }
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(SumBaseline::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Product;

    fn line(id: &str, price: i64, quantity: u32) -> CartLine {
        CartLine::new(Product::new(id, id, Decimal::from(price)), quantity)
    }

    #[test]
    fn test_legacy_add_carries_baseline() {
        let mut cart = CartState::new(SumBaseline::Legacy);
        assert_eq!(cart.sum, Decimal::ONE);

        cart.reduce(CartAction::Add(line("a", 500, 1)));
        assert_eq!(cart.products.len(), 1);
        assert_eq!(cart.sum, Decimal::from(501));
    }

    #[test]
    fn test_fetched_uses_zero_baseline_in_both_modes() {
        for baseline in [SumBaseline::Zero, SumBaseline::Legacy] {
            let mut cart = CartState::new(baseline);
            cart.reduce(CartAction::Fetched(vec![line("a", 100, 2), line("b", 50, 3)]));
            assert_eq!(cart.sum, Decimal::from(350));
        }
    }

    #[test]
    fn test_set_lines_baseline() {
        let lines = vec![line("a", 100, 2)];

        let mut zero = CartState::new(SumBaseline::Zero);
        zero.reduce(CartAction::SetLines(lines.clone()));
        assert_eq!(zero.sum, Decimal::from(200));

        let mut legacy = CartState::new(SumBaseline::Legacy);
        legacy.reduce(CartAction::SetLines(lines));
        assert_eq!(legacy.sum, Decimal::from(201));
    }

    #[test]
    fn test_zero_add_counts_full_subtotal() {
        let mut cart = CartState::default();
        cart.reduce(CartAction::Add(line("a", 10, 3)));
        assert_eq!(cart.sum, Decimal::from(30));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_commit_keeps_order_and_recomputes() {
        let mut cart = CartState::default();
        let lines = vec![line("a", 1, 1), line("b", 2, 1), line("c", 3, 1)];
        cart.reduce(CartAction::Commit(lines.clone()));
        assert_eq!(cart.products, lines);
        assert_eq!(cart.sum, Decimal::from(6));
    }

    #[test]
    fn test_clear_is_idempotent() {
        for baseline in [SumBaseline::Zero, SumBaseline::Legacy] {
            let mut cart = CartState::new(baseline);
            cart.reduce(CartAction::Add(line("a", 5, 1)));

            cart.reduce(CartAction::Clear);
            let once = cart.clone();
            cart.reduce(CartAction::Clear);

            assert_eq!(cart, once);
            assert_eq!(cart, CartState::new(baseline));
        }
    }

    #[test]
    fn test_baseline_from_str() {
        assert_eq!("zero".parse::<SumBaseline>().unwrap(), SumBaseline::Zero);
        assert_eq!(" Legacy ".parse::<SumBaseline>().unwrap(), SumBaseline::Legacy);
        assert!("two".parse::<SumBaseline>().is_err());
    }
}
