use crate::{
    middleware::{CurrentUser, SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Extension, Json, http::StatusCode, middleware, response::IntoResponse, routing::post,
};
use shared::{
    domain::{
        requests::{CreateOrderRequest, StockValidationRequest},
        responses::{ApiResponse, OrderResponse, StockValidationResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/stock/validate",
    request_body = StockValidationRequest,
    responses(
        (status = 200, description = "Stock validation report", body = ApiResponse<StockValidationResponse>),
        (status = 400, description = "Validation failed")
    ),
    tag = "Stock"
)]
pub async fn validate_stock(
    Extension(state): Extension<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<StockValidationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.stock_service.validate(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/stock/checkout",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Checkout completed", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation failed or insufficient stock"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Stock"
)]
pub async fn checkout(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .stock_service
        .checkout(current_user.user_id, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn stock_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/stock/validate", post(validate_stock))
        .layer(Extension(app_state.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/stock/checkout", post(checkout))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(private_routes)
}
