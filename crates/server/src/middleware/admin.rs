use crate::middleware::jwt::CurrentUser;
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::ErrorResponse;

/// Runs after `auth_middleware`, so a `CurrentUser` extension is always
/// present.
pub async fn admin_middleware(
    Extension(current_user): Extension<CurrentUser>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    if !current_user.is_admin {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                status: "fail".to_string(),
                message: "Admin privileges required".to_string(),
            }),
        ));
    }

    Ok(next.run(req).await)
}
