use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllProducts, errors::RepositoryError, model::Product,
};
use async_trait::async_trait;
use sqlx::FromRow;
use tracing::{error, info};

#[derive(FromRow)]
struct ProductRow {
    #[sqlx(flatten)]
    product: Product,
    total_count: i64,
}

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        info!("🔍 Fetching all products with search: {:?}", req.search);

        let (page_size, offset) = req.limit_offset();

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT product_id, name, description, price, category_id, image_url, stock,
                   is_active, created_at, updated_at,
                   COUNT(*) OVER() AS total_count
            FROM products
            WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%')
              AND ($2::INT4 IS NULL OR category_id = $2)
              AND ($3::FLOAT8 IS NULL OR price >= $3)
              AND ($4::FLOAT8 IS NULL OR price <= $4)
              AND ($5::BOOL IS NULL OR is_active = $5)
            ORDER BY created_at DESC
            LIMIT $6 OFFSET $7
            "#,
        )
        .bind(search_pattern)
        .bind(req.category_id)
        .bind(req.min_price)
        .bind(req.max_price)
        .bind(req.is_active)
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {e:?}");
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let products = rows.into_iter().map(|r| r.product).collect();

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        info!("🔍 Fetching product by id: {id}");

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, description, price, category_id, image_url, stock,
                   is_active, created_at, updated_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(product)
    }
}
