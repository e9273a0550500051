//! Seed the database with demo orders.
//!
//! Useful for trying out the shopkeeper dashboard without walking through
//! the customer flow by hand.

use tracing::info;

use orderdesk_core::{CustomerName, ItemList, ShopId};
use orderdesk_server::config::OrderdeskConfig;
use orderdesk_server::db::{self, OrderRepository};

/// Insert a handful of pending demo orders for a shop.
///
/// Migrations are applied first so seeding works against a fresh database.
///
/// # Errors
///
/// Returns an error if configuration is missing, the shop id is empty, or
/// a database operation fails.
pub async fn run(shop: &str) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = OrderdeskConfig::from_env()?;
    let shop_id = ShopId::parse(shop)?;

    let pool = db::create_pool(&config.database_url).await?;
    db::MIGRATOR.run(&pool).await?;

    let repo = OrderRepository::new(&pool);
    let demo: &[(&str, &[&str])] = &[
        ("Alice", &["Tea", "Cake"]),
        ("Bob", &["Espresso"]),
        ("Carol", &["Sandwich", "Juice", "Cookie"]),
    ];

    for (customer, item_names) in demo {
        let customer_name = CustomerName::parse(customer)?;
        let items = ItemList::new(item_names.iter().map(|s| (*s).to_owned()).collect())?;
        let order_id = repo.create(&shop_id, &customer_name, &items).await?;
        info!(%order_id, customer = %customer_name, "Seeded order");
    }

    info!(shop = %shop_id, count = demo.len(), "Seeding complete!");
    Ok(())
}
