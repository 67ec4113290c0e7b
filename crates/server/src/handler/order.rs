use crate::{
    middleware::{CurrentUser, SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use shared::{
    domain::{
        requests::{CreateOrderRequest, FindAllOrders, UpdateOrderStatusRequest},
        responses::{ApiResponse, ApiResponsePagination, OrderResponse, OrderStatusResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders",
    params(FindAllOrders),
    responses(
        (status = 200, description = "Current user's orders", body = ApiResponsePagination<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn get_orders(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_service
        .find_all(current_user.user_id, &params)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order detail", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn get_order(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_service
        .find_by_id(current_user.user_id, id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation failed or insufficient stock")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn create_order(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_service
        .create(current_user.user_id, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/cancel",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order cancelled", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order can no longer be cancelled")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn cancel_order(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_service
        .cancel(current_user.user_id, id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/status",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order status", body = ApiResponse<OrderStatusResponse>),
        (status = 404, description = "Order not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn get_order_status(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_service
        .get_status(current_user.user_id, id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    params(("id" = i32, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Order not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn update_order_status(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_service
        .update_status(current_user.user_id, id, &body)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders).post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/cancel", put(cancel_order))
        .route(
            "/api/orders/{id}/status",
            get(get_order_status).put(update_order_status),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
