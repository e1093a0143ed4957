//! Data models
//!
//! Wire shapes of the storefront REST API, shared by the client and
//! anything that renders or fakes it.

pub mod cart;
pub mod order;
pub mod product;

// Re-exports
pub use cart::*;
pub use order::*;
pub use product::*;
