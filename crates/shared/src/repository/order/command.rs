use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::NewOrder,
    errors::RepositoryError,
    model::{Order, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        user_id: i32,
        order: &NewOrder,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        info!(
            "📝 Creating order for user {user_id} with {} items",
            order.items.len()
        );

        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        let created = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (user_id, total_price, status, shipping_address, payment_method)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING order_id, user_id, total_price, status, shipping_address, payment_method,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(order.total_price)
        .bind(OrderStatus::Pending.as_str())
        .bind(&order.shipping_address)
        .bind(&order.payment_method)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert order: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut items = Vec::with_capacity(order.items.len());

        for item in &order.items {
            // Guarded decrement: zero rows means another order drained the
            // stock since validation, so the whole transaction rolls back.
            let decremented = sqlx::query(
                r#"
                UPDATE products
                SET stock = stock - $2, updated_at = NOW()
                WHERE product_id = $1 AND stock >= $2
                "#,
            )
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to decrement stock for product {}: {e:?}", item.product_id);
                RepositoryError::from(e)
            })?;

            if decremented.rows_affected() == 0 {
                return Err(RepositoryError::Conflict(format!(
                    "insufficient stock for product {}",
                    item.product_id
                )));
            }

            let inserted = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, price)
                VALUES ($1, $2, $3, $4)
                RETURNING order_item_id, order_id, product_id, quantity, price, created_at
                "#,
            )
            .bind(created.order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert order item: {e:?}");
                RepositoryError::from(e)
            })?;

            items.push(inserted);
        }

        if order.clear_cart {
            sqlx::query(
                r#"
                DELETE FROM cart_items
                WHERE cart_id IN (SELECT cart_id FROM carts WHERE user_id = $1)
                "#,
            )
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to clear cart for user {user_id}: {e:?}");
                RepositoryError::from(e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit order transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Order created with id: {}", created.order_id);
        Ok((created, items))
    }

    async fn cancel_order(&self, order_id: i32, user_id: i32) -> Result<Order, RepositoryError> {
        info!("📝 Cancelling order {order_id} for user {user_id}");

        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        let current = sqlx::query_as::<_, Order>(
            r#"
            SELECT order_id, user_id, total_price, status, shipping_address, payment_method,
                   created_at, updated_at
            FROM orders
            WHERE order_id = $1 AND user_id = $2
            FOR UPDATE
            "#,
        )
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        let status = current
            .status
            .parse::<OrderStatus>()
            .map_err(RepositoryError::Custom)?;

        if !status.is_cancellable() {
            return Err(RepositoryError::Conflict(format!(
                "order is {} and can no longer be cancelled",
                current.status
            )));
        }

        sqlx::query(
            r#"
            UPDATE products p
            SET stock = p.stock + oi.quantity, updated_at = NOW()
            FROM order_items oi
            WHERE oi.order_id = $1 AND oi.product_id = p.product_id
            "#,
        )
        .bind(order_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to restore stock for order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        let cancelled = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $2, updated_at = NOW()
            WHERE order_id = $1
            RETURNING order_id, user_id, total_price, status, shipping_address, payment_method,
                      created_at, updated_at
            "#,
        )
        .bind(order_id)
        .bind(OrderStatus::Cancelled.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to cancel order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit cancel transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Order {order_id} cancelled and stock restored");
        Ok(cancelled)
    }

    async fn update_status(
        &self,
        order_id: i32,
        user_id: i32,
        status: &str,
    ) -> Result<Order, RepositoryError> {
        info!("📝 Updating order {order_id} status to {status}");

        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $3, updated_at = NOW()
            WHERE order_id = $1 AND user_id = $2
            RETURNING order_id, user_id, total_price, status, shipping_address, payment_method,
                      created_at, updated_at
            "#,
        )
        .bind(order_id)
        .bind(user_id)
        .bind(status)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update status of order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(order)
    }
}
