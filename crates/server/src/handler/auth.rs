use crate::{
    middleware::{CurrentUser, SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    domain::{
        requests::{LoginRequest, RefreshTokenRequest, RegisterRequest, UpdateProfileRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "Personal shopper API built with Axum, Postgres and SQLX";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": MESSAGE
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email or username already taken")
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    Extension(state): Extension<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.register_service.register(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    Extension(state): Extension<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state.di_container.login_service.login(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token refreshed", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Invalid or expired refresh token")
    ),
    tag = "Auth"
)]
pub async fn refresh_token_handler(
    Extension(state): Extension<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<RefreshTokenRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .identity_service
        .refresh_token(&body.refresh_token)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user profile", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Auth",
)]
pub async fn get_me_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .identity_service
        .get_me(current_user.user_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/auth/me",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Email or username already taken")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Auth",
)]
pub async fn update_me_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .identity_service
        .update_me(current_user.user_id, &body)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/auth/register", post(register_user_handler))
        .route("/api/auth/login", post(login_user_handler))
        .route("/api/auth/refresh", post(refresh_token_handler))
        .route("/api/healthchecker", get(health_checker_handler))
        .layer(Extension(app_state.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/auth/me", get(get_me_handler).put(update_me_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(private_routes)
}
