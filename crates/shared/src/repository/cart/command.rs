use crate::{
    abstract_trait::CartCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Cart, CartItem},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct CartCommandRepository {
    db: ConnectionPool,
}

impl CartCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartCommandRepositoryTrait for CartCommandRepository {
    async fn get_or_create(&self, user_id: i32) -> Result<Cart, RepositoryError> {
        info!("📝 Ensuring cart exists for user: {user_id}");

        // A user has at most one cart; racing inserts collapse onto the
        // existing row.
        let cart = sqlx::query_as::<_, Cart>(
            r#"
            INSERT INTO carts (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO UPDATE SET updated_at = NOW()
            RETURNING cart_id, user_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to get or create cart for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(cart)
    }

    async fn add_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
        price_at_time: f64,
    ) -> Result<CartItem, RepositoryError> {
        info!("📝 Adding product {product_id} x{quantity} to cart {cart_id}");

        // Re-adding a product accumulates quantity instead of duplicating the
        // row; the price snapshot keeps the value from the first add.
        let item = sqlx::query_as::<_, CartItem>(
            r#"
            INSERT INTO cart_items (cart_id, product_id, quantity, price_at_time)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (cart_id, product_id)
            DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity,
                          updated_at = NOW()
            RETURNING cart_item_id, cart_id, product_id, quantity, price_at_time,
                      created_at, updated_at
            "#,
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .bind(price_at_time)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to add item to cart {cart_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(item)
    }

    async fn update_item_quantity(
        &self,
        cart_item_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        info!("📝 Updating cart item {cart_item_id} quantity to {quantity}");

        let item = sqlx::query_as::<_, CartItem>(
            r#"
            UPDATE cart_items
            SET quantity = $2, updated_at = NOW()
            WHERE cart_item_id = $1
            RETURNING cart_item_id, cart_id, product_id, quantity, price_at_time,
                      created_at, updated_at
            "#,
        )
        .bind(cart_item_id)
        .bind(quantity)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update cart item {cart_item_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(item)
    }

    async fn delete_item(&self, cart_item_id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Removing cart item: {cart_item_id}");

        let result = sqlx::query("DELETE FROM cart_items WHERE cart_item_id = $1")
            .bind(cart_item_id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to remove cart item {cart_item_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn clear(&self, cart_id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Clearing cart: {cart_id}");

        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(cart_id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to clear cart {cart_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(())
    }
}
