//! HTTP route handlers for the server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                           - Landing page
//! GET  /health                     - Health check (in main.rs)
//!
//! # Customer
//! GET  /customer                   - Shop/name selection form
//! POST /customer/start_order       - Initialize customer session
//! GET  /customer/order             - Current order page
//! POST /customer/add_item          - Append an item
//! POST /customer/confirm_order     - Submit the order
//! POST /customer/cancel_order      - Clear the in-progress order
//!
//! # Shopkeeper
//! GET  /shopkeeper                 - Login form
//! POST /shopkeeper/dashboard       - Log in to a shop
//! GET  /shopkeeper/orders          - Pending/confirmed dashboard
//! POST /shopkeeper/confirm_order   - Confirm a pending order
//! GET  /shopkeeper/logout          - Log out
//! ```

pub mod customer;
pub mod home;
pub mod shopkeeper;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(customer::select_shop))
        .route("/start_order", post(customer::start_order))
        .route("/order", get(customer::order_page))
        .route("/add_item", post(customer::add_item))
        .route("/confirm_order", post(customer::confirm_order))
        .route("/cancel_order", post(customer::cancel_order))
}

/// Create the shopkeeper routes router.
pub fn shopkeeper_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shopkeeper::login_page))
        .route("/dashboard", post(shopkeeper::login))
        .route("/orders", get(shopkeeper::orders))
        .route("/confirm_order", post(shopkeeper::confirm_order))
        .route("/logout", get(shopkeeper::logout))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        // Customer flow
        .nest("/customer", customer_routes())
        // Shopkeeper flow
        .nest("/shopkeeper", shopkeeper_routes())
}
