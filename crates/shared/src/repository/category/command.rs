use crate::{
    abstract_trait::CategoryCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError> {
        info!("📝 Creating category: {}", req.name);

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING category_id, name, description, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create category: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Category created with id: {}", category.category_id);
        Ok(category)
    }

    async fn update(&self, req: &UpdateCategoryRequest) -> Result<Category, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("category id is required".into()))?;

        info!("📝 Updating category: {id}");

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE category_id = $1
            RETURNING category_id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update category {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(category)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting category: {id}");

        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete category {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
