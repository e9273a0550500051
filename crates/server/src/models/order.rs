//! Order domain model.

use chrono::{DateTime, Utc};

use orderdesk_core::{CustomerName, ItemList, OrderId, OrderStatus, ShopId};

/// One customer's submitted item list for one shop.
///
/// `id`, `shop_id`, `customer_name`, and `items` are immutable after
/// creation; only `status` ever changes, and only from pending to confirmed.
#[derive(Debug, Clone)]
pub struct Order {
    /// Database ID, assigned monotonically on creation.
    pub id: OrderId,
    /// Shop the order was placed at.
    pub shop_id: ShopId,
    /// Who placed the order.
    pub customer_name: CustomerName,
    /// Ordered items, exactly as entered.
    pub items: ItemList,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was submitted.
    pub created_at: DateTime<Utc>,
}
