//! Order repository for database operations.
//!
//! All access to the `orders` table goes through [`OrderRepository`]. The
//! repository only ever inserts rows and flips `status` from pending to
//! confirmed; nothing is updated otherwise and nothing is deleted.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use orderdesk_core::{CustomerName, ItemList, OrderId, OrderStatus, ShopId};

use super::RepositoryError;
use crate::models::order::Order;

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

/// Raw row shape; domain validation happens in [`OrderRow::into_order`].
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    shop_id: String,
    customer_name: String,
    items: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, RepositoryError> {
        let shop_id = ShopId::parse(&self.shop_id).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid shop id in database: {e}"))
        })?;

        let customer_name = CustomerName::parse(&self.customer_name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid customer name in database: {e}"))
        })?;

        let item_names: Vec<String> = serde_json::from_str(&self.items).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid items in database: {e}"))
        })?;
        let items = ItemList::new(item_names).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid items in database: {e}"))
        })?;

        let status = self.status.parse::<OrderStatus>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid status in database: {e}"))
        })?;

        Ok(Order {
            id: OrderId::new(self.id),
            shop_id,
            customer_name,
            items,
            status,
            created_at: self.created_at,
        })
    }
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new order with status `pending` and a freshly assigned id.
    ///
    /// `items` is non-empty by construction ([`ItemList`] enforces it), so
    /// every inserted row satisfies the at-least-one-item invariant.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        shop_id: &ShopId,
        customer_name: &CustomerName,
        items: &ItemList,
    ) -> Result<OrderId, RepositoryError> {
        let items_json = serde_json::to_string(items).map_err(|e| {
            RepositoryError::DataCorruption(format!("failed to encode items: {e}"))
        })?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO orders (shop_id, customer_name, items, status, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING id",
        )
        .bind(shop_id.clone())
        .bind(customer_name.clone())
        .bind(items_json)
        .bind(OrderStatus::Pending.to_string())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(OrderId::new(id))
    }

    /// List a shop's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row fails to decode.
    pub async fn list_by_shop(&self, shop_id: &ShopId) -> Result<Vec<Order>, RepositoryError> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            "SELECT id, shop_id, customer_name, items, status, created_at \
             FROM orders \
             WHERE shop_id = ?1 \
             ORDER BY id DESC",
        )
        .bind(shop_id.clone())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    /// Set an order's status to confirmed.
    ///
    /// Idempotent in effect: confirming an already-confirmed order is a
    /// silent success. Shop ownership is NOT checked here; the handler
    /// authorizes before calling.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this id.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn confirm(&self, id: OrderId) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE orders SET status = ?1 WHERE id = ?2")
            .bind(OrderStatus::Confirmed.to_string())
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    fn shop(s: &str) -> ShopId {
        ShopId::parse(s).unwrap()
    }

    fn customer(s: &str) -> CustomerName {
        CustomerName::parse(s).unwrap()
    }

    fn items(names: &[&str]) -> ItemList {
        ItemList::new(names.iter().map(|s| (*s).to_owned()).collect()).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_pending_status_and_fresh_id() {
        let pool = test_pool().await;
        let repo = OrderRepository::new(&pool);

        let id = repo
            .create(&shop("S1"), &customer("Alice"), &items(&["Tea", "Cake"]))
            .await
            .unwrap();

        let orders = repo.list_by_shop(&shop("S1")).await.unwrap();
        assert_eq!(orders.len(), 1);
        let order = orders.first().unwrap();
        assert_eq!(order.id, id);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.shop_id.as_str(), "S1");
        assert_eq!(order.customer_name.as_str(), "Alice");
    }

    #[tokio::test]
    async fn test_items_round_trip_preserves_order() {
        let pool = test_pool().await;
        let repo = OrderRepository::new(&pool);

        let entered = items(&["Cake", "Tea", "Apple pie"]);
        repo.create(&shop("S1"), &customer("Alice"), &entered)
            .await
            .unwrap();

        let orders = repo.list_by_shop(&shop("S1")).await.unwrap();
        assert_eq!(orders.first().unwrap().items, entered);
    }

    #[tokio::test]
    async fn test_list_by_shop_is_newest_first() {
        let pool = test_pool().await;
        let repo = OrderRepository::new(&pool);

        let first = repo
            .create(&shop("S1"), &customer("Alice"), &items(&["Tea"]))
            .await
            .unwrap();
        let second = repo
            .create(&shop("S1"), &customer("Bob"), &items(&["Cake"]))
            .await
            .unwrap();

        let ids: Vec<OrderId> = repo
            .list_by_shop(&shop("S1"))
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[tokio::test]
    async fn test_list_by_shop_never_returns_other_shops() {
        let pool = test_pool().await;
        let repo = OrderRepository::new(&pool);

        repo.create(&shop("S1"), &customer("Alice"), &items(&["Tea"]))
            .await
            .unwrap();
        repo.create(&shop("S2"), &customer("Bob"), &items(&["Cake"]))
            .await
            .unwrap();

        let orders = repo.list_by_shop(&shop("S1")).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert!(orders.iter().all(|o| o.shop_id.as_str() == "S1"));

        let orders = repo.list_by_shop(&shop("S3")).await.unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn test_confirm_sets_status() {
        let pool = test_pool().await;
        let repo = OrderRepository::new(&pool);

        let id = repo
            .create(&shop("S1"), &customer("Alice"), &items(&["Tea"]))
            .await
            .unwrap();
        repo.confirm(id).await.unwrap();

        let orders = repo.list_by_shop(&shop("S1")).await.unwrap();
        assert_eq!(orders.first().unwrap().status, OrderStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_confirm_is_idempotent() {
        let pool = test_pool().await;
        let repo = OrderRepository::new(&pool);

        let id = repo
            .create(&shop("S1"), &customer("Alice"), &items(&["Tea"]))
            .await
            .unwrap();
        repo.confirm(id).await.unwrap();
        repo.confirm(id).await.unwrap();

        let orders = repo.list_by_shop(&shop("S1")).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders.first().unwrap().status, OrderStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_confirm_missing_order_is_not_found() {
        let pool = test_pool().await;
        let repo = OrderRepository::new(&pool);

        let result = repo.confirm(OrderId::new(999)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }
}
