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
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        responses::{
            ApiResponse, ApiResponsePagination, ProductAvailabilityResponse, ProductResponse,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    params(FindAllProducts),
    responses(
        (status = 200, description = "List of products", body = ApiResponsePagination<Vec<ProductResponse>>),
        (status = 400, description = "Invalid filter combination")
    ),
    tag = "Product"
)]
pub async fn get_products(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.product_service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    ),
    tag = "Product"
)]
pub async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.product_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/availability",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product availability", body = ApiResponse<ProductAvailabilityResponse>),
        (status = 404, description = "Product not found")
    ),
    tag = "Product"
)]
pub async fn get_product_availability(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.product_service.availability(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed or unknown category"),
        (status = 403, description = "Admin privileges required")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Product"
)]
pub async fn create_product(
    Extension(state): Extension<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.product_service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Product not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Product"
)]
pub async fn update_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);

    let response = state.di_container.product_service.update(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Product not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Product"
)]
pub async fn delete_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    state.di_container.product_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Product deleted successfully", ())),
    ))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", get(get_product))
        .route(
            "/api/products/{id}/availability",
            get(get_product_availability),
        )
        .layer(Extension(app_state.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(admin_routes)
}
