//! OrderDesk Core - Shared types library.
//!
//! This crate provides common types used across all OrderDesk components:
//! - `server` - Customer ordering and shopkeeper dashboard web application
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, shop identifiers, customer
//!   names, item lists, and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
