use crate::{
    middleware::{CurrentUser, SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    domain::{
        requests::{AddCartItemRequest, UpdateCartItemRequest},
        responses::{ApiResponse, CartItemResponse, CartResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Current user's cart", body = ApiResponse<CartResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .cart_service
        .get_cart(current_user.user_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/cart/items",
    request_body = AddCartItemRequest,
    responses(
        (status = 201, description = "Item added to cart", body = ApiResponse<CartItemResponse>),
        (status = 400, description = "Product unavailable or insufficient stock"),
        (status = 404, description = "Product not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Cart"
)]
pub async fn add_cart_item(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .cart_service
        .add_item(current_user.user_id, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/cart/items/{id}",
    params(("id" = i32, Path, description = "Cart item id")),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Cart item updated", body = ApiResponse<CartItemResponse>),
        (status = 400, description = "Insufficient stock"),
        (status = 404, description = "Cart item not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .cart_service
        .update_item(current_user.user_id, id, &body)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/cart/items/{id}",
    params(("id" = i32, Path, description = "Cart item id")),
    responses(
        (status = 200, description = "Cart item removed"),
        (status = 404, description = "Cart item not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Cart"
)]
pub async fn remove_cart_item(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    state
        .di_container
        .cart_service
        .remove_item(current_user.user_id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Item removed from cart", ())),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart cleared"),
        (status = 404, description = "Cart not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, HttpError> {
    state
        .di_container
        .cart_service
        .clear(current_user.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Cart cleared successfully", ())),
    ))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cart", get(get_cart).delete(clear_cart))
        .route("/api/cart/items", post(add_cart_item))
        .route(
            "/api/cart/items/{id}",
            put(update_cart_item).delete(remove_cart_item),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
