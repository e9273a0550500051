//! Core types for OrderDesk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod customer;
pub mod id;
pub mod items;
pub mod shop;
pub mod status;

pub use customer::{CustomerName, CustomerNameError};
pub use id::*;
pub use items::{ItemList, ItemListError};
pub use shop::{ShopId, ShopIdError};
pub use status::OrderStatus;
