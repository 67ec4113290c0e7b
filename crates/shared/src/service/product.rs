use crate::{
    abstract_trait::{
        DynCategoryQueryRepository, DynProductCommandRepository, DynProductQueryRepository,
        ProductServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        responses::{
            ApiResponse, ApiResponsePagination, Pagination, ProductAvailabilityResponse,
            ProductResponse,
        },
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct ProductService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    categories: DynCategoryQueryRepository,
}

impl ProductService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        categories: DynCategoryQueryRepository,
    ) -> Self {
        Self {
            query,
            command,
            categories,
        }
    }

    async fn ensure_category_exists(&self, category_id: i32) -> Result<(), ServiceError> {
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Repo(RepositoryError::ForeignKey(format!(
                    "category {category_id} does not exist"
                )))
            })?;

        Ok(())
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        if let (Some(min), Some(max)) = (req.min_price, req.max_price)
            && min > max
        {
            return Err(ServiceError::Validation(vec![
                "min_price cannot be greater than max_price".into(),
            ]));
        }

        let (products, total) = self.query.find_all(req).await?;

        let responses = products
            .into_iter()
            .map(ProductResponse::from)
            .collect::<Vec<_>>();

        // Metadata reports the page size the query actually used.
        let (page_size, _) = req.limit_offset();

        Ok(ApiResponsePagination::success(
            "Products retrieved successfully",
            responses,
            Pagination::new(req.page.max(1), page_size as i32, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ApiResponse::success(
            "Product retrieved successfully",
            ProductResponse::from(product),
        ))
    }

    async fn availability(
        &self,
        id: i32,
    ) -> Result<ApiResponse<ProductAvailabilityResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ApiResponse::success(
            "Availability retrieved successfully",
            ProductAvailabilityResponse::from(product),
        ))
    }

    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        req.validate()?;

        self.ensure_category_exists(req.category_id).await?;

        let product = self.command.create(req).await?;

        info!("✅ Product created: {}", product.product_id);

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(product),
        ))
    }

    async fn update(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        req.validate()?;

        let id = req
            .id
            .ok_or_else(|| ServiceError::Custom("product id is required".into()))?;

        self.query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if let Some(category_id) = req.category_id {
            self.ensure_category_exists(category_id).await?;
        }

        let product = self.command.update(req).await?;

        Ok(ApiResponse::success(
            "Product updated successfully",
            ProductResponse::from(product),
        ))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete(id).await?;

        info!("✅ Product deleted: {id}");
        Ok(())
    }
}
