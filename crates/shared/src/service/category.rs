use crate::{
    abstract_trait::{
        CategoryServiceTrait, DynCategoryCommandRepository, DynCategoryQueryRepository,
    },
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        responses::{ApiResponse, ApiResponsePagination, CategoryResponse, Pagination},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct CategoryService {
    query: DynCategoryQueryRepository,
    command: DynCategoryCommandRepository,
}

impl CategoryService {
    pub fn new(query: DynCategoryQueryRepository, command: DynCategoryCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ServiceError> {
        let (categories, total) = self.query.find_all(req).await?;

        let responses = categories
            .into_iter()
            .map(CategoryResponse::from)
            .collect::<Vec<_>>();

        let (page_size, _) = req.limit_offset();

        Ok(ApiResponsePagination::success(
            "Categories retrieved successfully",
            responses,
            Pagination::new(req.page.max(1), page_size as i32, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ApiResponse::success(
            "Category retrieved successfully",
            CategoryResponse::from(category),
        ))
    }

    async fn create(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        req.validate()?;

        if self.query.find_by_name(&req.name).await?.is_some() {
            return Err(RepositoryError::AlreadyExists("Category already exists".into()).into());
        }

        let category = self.command.create(req).await?;

        info!("✅ Category created: {}", category.category_id);

        Ok(ApiResponse::success(
            "Category created successfully",
            CategoryResponse::from(category),
        ))
    }

    async fn update(
        &self,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        req.validate()?;

        let id = req
            .id
            .ok_or_else(|| ServiceError::Custom("category id is required".into()))?;

        self.query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = &req.name
            && let Some(existing) = self.query.find_by_name(name).await?
            && existing.category_id != id
        {
            return Err(RepositoryError::AlreadyExists("Category already exists".into()).into());
        }

        let category = self.command.update(req).await?;

        Ok(ApiResponse::success(
            "Category updated successfully",
            CategoryResponse::from(category),
        ))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete(id).await?;

        info!("✅ Category deleted: {id}");
        Ok(())
    }
}
