use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        info!("📝 Creating product: {}", req.name);

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, category_id, image_url, stock)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING product_id, name, description, price, category_id, image_url, stock,
                      is_active, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.category_id)
        .bind(&req.image_url)
        .bind(req.stock)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Product created with id: {}", product.product_id);
        Ok(product)
    }

    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("product id is required".into()))?;

        info!("📝 Updating product: {id}");

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                category_id = COALESCE($5, category_id),
                image_url = COALESCE($6, image_url),
                stock = COALESCE($7, stock),
                is_active = COALESCE($8, is_active),
                updated_at = NOW()
            WHERE product_id = $1
            RETURNING product_id, name, description, price, category_id, image_url, stock,
                      is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.category_id)
        .bind(&req.image_url)
        .bind(req.stock)
        .bind(req.is_active)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting product: {id}");

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
