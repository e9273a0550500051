//! Integration tests for OrderDesk.
//!
//! These tests drive a running server over real HTTP with browser-like
//! cookie handling, so they are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server against a scratch database
//! ORDERDESK_DATABASE_URL=sqlite://scratch.db cargo run -p orderdesk-server
//!
//! # Run integration tests
//! cargo test -p orderdesk-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `customer_flow` - Shop selection, item building, submission
//! - `shopkeeper_flow` - Login, dashboard, order confirmation
//!
//! Tests generate unique shop ids per run (uuid), so they can be re-run
//! against the same database without interfering with each other.
