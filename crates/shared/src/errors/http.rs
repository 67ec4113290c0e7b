use crate::errors::{
    error::ErrorResponse, repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    InsufficientStock(serde_json::Value),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token type".into()),

            ServiceError::InsufficientStock(items) => HttpError::InsufficientStock(items),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if let HttpError::InsufficientStock(items) = self {
            let body = Json(json!({
                "status": "error",
                "message": "Some items do not have enough stock",
                "unavailable_items": items,
            }));
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::InsufficientStock(_) => unreachable!(),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_maps_to_unauthorized() {
        let err = HttpError::from(ServiceError::InvalidCredentials);
        assert!(matches!(err, HttpError::Unauthorized(_)));
    }

    #[test]
    fn already_exists_maps_to_conflict() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::AlreadyExists(
            "email taken".into(),
        )));
        assert!(matches!(err, HttpError::Conflict(_)));
    }

    #[test]
    fn repo_not_found_maps_to_not_found() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
        assert!(matches!(err, HttpError::NotFound(_)));
    }

    #[test]
    fn expired_token_maps_to_unauthorized() {
        let err = HttpError::from(ServiceError::TokenExpired);
        assert!(matches!(err, HttpError::Unauthorized(_)));
    }
}
