use crate::{
    middleware::{SimpleValidatedJson, admin_middleware, auth_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        responses::{ApiResponse, ApiResponsePagination, CategoryResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/categories",
    params(FindAllCategories),
    responses(
        (status = 200, description = "List of categories", body = ApiResponsePagination<Vec<CategoryResponse>>)
    ),
    tag = "Category"
)]
pub async fn get_categories(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FindAllCategories>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.category_service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category detail", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    ),
    tag = "Category"
)]
pub async fn get_category(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.category_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 403, description = "Admin privileges required"),
        (status = 409, description = "Category already exists")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Category"
)]
pub async fn create_category(
    Extension(state): Extension<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.category_service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Category not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Category"
)]
pub async fn update_category(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);

    let response = state.di_container.category_service.update(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Category not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Category"
)]
pub async fn delete_category(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    state.di_container.category_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Category deleted successfully", ())),
    ))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/categories", get(get_categories))
        .route("/api/categories/{id}", get(get_category))
        .layer(Extension(app_state.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/categories", post(create_category))
        .route("/api/categories/{id}", put(update_category))
        .route("/api/categories/{id}", delete(delete_category))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(admin_routes)
}
