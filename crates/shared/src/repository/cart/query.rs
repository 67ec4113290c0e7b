use crate::{
    abstract_trait::CartQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Cart, CartItem},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct CartQueryRepository {
    db: ConnectionPool,
}

impl CartQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for CartQueryRepository {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<Cart>, RepositoryError> {
        info!("🔍 Fetching cart for user: {user_id}");

        let cart = sqlx::query_as::<_, Cart>(
            r#"
            SELECT cart_id, user_id, created_at, updated_at
            FROM carts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cart for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(cart)
    }

    async fn find_items(&self, cart_id: i32) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>(
            r#"
            SELECT cart_item_id, cart_id, product_id, quantity, price_at_time,
                   created_at, updated_at
            FROM cart_items
            WHERE cart_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(cart_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items for cart {cart_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }

    async fn find_item_by_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let item = sqlx::query_as::<_, CartItem>(
            r#"
            SELECT cart_item_id, cart_id, product_id, quantity, price_at_time,
                   created_at, updated_at
            FROM cart_items
            WHERE cart_id = $1 AND product_id = $2
            "#,
        )
        .bind(cart_id)
        .bind(product_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cart item: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(item)
    }

    async fn find_item_for_user(
        &self,
        cart_item_id: i32,
        user_id: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let item = sqlx::query_as::<_, CartItem>(
            r#"
            SELECT ci.cart_item_id, ci.cart_id, ci.product_id, ci.quantity, ci.price_at_time,
                   ci.created_at, ci.updated_at
            FROM cart_items ci
            JOIN carts c ON c.cart_id = ci.cart_id
            WHERE ci.cart_item_id = $1 AND c.user_id = $2
            "#,
        )
        .bind(cart_item_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cart item {cart_item_id} for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(item)
    }
}
