use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllOrders,
    errors::RepositoryError,
    model::{Order, OrderItem},
};
use async_trait::async_trait;
use sqlx::FromRow;
use tracing::{error, info};

#[derive(FromRow)]
struct OrderRow {
    #[sqlx(flatten)]
    order: Order,
    total_count: i64,
}

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all_by_user(
        &self,
        user_id: i32,
        req: &FindAllOrders,
    ) -> Result<(Vec<Order>, i64), RepositoryError> {
        info!("🔍 Fetching orders for user: {user_id}");

        let (page_size, offset) = req.limit_offset();

        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT order_id, user_id, total_price, status, shipping_address, payment_method,
                   created_at, updated_at,
                   COUNT(*) OVER() AS total_count
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let orders = rows.into_iter().map(|r| r.order).collect();

        Ok((orders, total))
    }

    async fn find_by_id_for_user(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<Option<Order>, RepositoryError> {
        info!("🔍 Fetching order {order_id} for user {user_id}");

        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT order_id, user_id, total_price, status, shipping_address, payment_method,
                   created_at, updated_at
            FROM orders
            WHERE order_id = $1 AND user_id = $2
            "#,
        )
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(order)
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT order_item_id, order_id, product_id, quantity, price, created_at
            FROM order_items
            WHERE order_id = $1
            ORDER BY order_item_id ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items for order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
