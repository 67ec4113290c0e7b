use crate::{
    abstract_trait::CategoryQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllCategories, errors::RepositoryError, model::Category,
};
use async_trait::async_trait;
use sqlx::FromRow;
use tracing::{error, info};

#[derive(FromRow)]
struct CategoryRow {
    #[sqlx(flatten)]
    category: Category,
    total_count: i64,
}

#[derive(Clone)]
pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<(Vec<Category>, i64), RepositoryError> {
        info!("🔍 Fetching all categories with search: {:?}", req.search);

        let (page_size, offset) = req.limit_offset();

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, name, description, created_at, updated_at,
                   COUNT(*) OVER() AS total_count
            FROM categories
            WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
            ORDER BY name ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern)
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch categories: {e:?}");
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let categories = rows.into_iter().map(|r| r.category).collect();

        Ok((categories, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        info!("🔍 Fetching category by id: {id}");

        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, name, description, created_at, updated_at
            FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch category {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(category)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, name, description, created_at, updated_at
            FROM categories
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch category by name: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(category)
    }
}
