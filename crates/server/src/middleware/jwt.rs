use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    abstract_trait::{DynJwtService, DynUserQueryRepository},
    errors::ErrorResponse,
};

/// Authenticated identity attached to the request after the token check.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: i32,
    pub is_admin: bool,
}

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            status: "fail".to_string(),
            message: message.to_string(),
        }),
    )
}

pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    Extension(users): Extension<DynUserQueryRepository>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let token = match token {
        Some(token) => token,
        None => {
            return Err(unauthorized(
                "You are not logged in, please provide token",
            ));
        }
    };

    let user_id = match jwt.verify_token(&token, "access") {
        Ok(id) => id as i32,
        Err(_) => return Err(unauthorized("Invalid token")),
    };

    let user = match users.find_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(unauthorized("User no longer exists")),
        Err(_) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    status: "error".to_string(),
                    message: "Failed to verify user".to_string(),
                }),
            ));
        }
    };

    if !user.is_active {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                status: "fail".to_string(),
                message: "Account is deactivated".to_string(),
            }),
        ));
    }

    req.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
        is_admin: user.is_admin,
    });

    Ok(next.run(req).await)
}
