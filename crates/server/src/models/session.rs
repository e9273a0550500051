//! Session-related types.
//!
//! Types stored in the session for the customer and shopkeeper flows.

use serde::{Deserialize, Serialize};

use orderdesk_core::{CustomerName, ShopId};

/// Role-tagged per-browser session state.
///
/// A session is anonymous, a customer building an order, or a shopkeeper
/// viewing a shop — carrying the role in the type makes an ambiguous
/// customer/shopkeeper mix unrepresentable. Stored as one value under
/// [`keys::STATE`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum SessionState {
    /// No role established yet.
    #[default]
    Anonymous,

    /// A customer with a shop selected and an in-progress item list.
    ///
    /// `items` may be empty (just started, cancelled, or just submitted);
    /// submission requires at least one item.
    CustomerOrdering {
        shop_id: ShopId,
        customer_name: CustomerName,
        items: Vec<String>,
    },

    /// A shopkeeper logged in to a shop.
    ShopkeeperAuthenticated { shop_id: ShopId },
}

/// Session keys.
pub mod keys {
    /// Key for the role-tagged session state.
    pub const STATE: &str = "state";
}
