use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "matheus@example.com")]
    pub email: String,

    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    #[schema(example = "matheus_dias")]
    pub username: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "senha123")]
    pub password: String,

    #[validate(length(max = 255))]
    #[schema(example = "Matheus Dias")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "matheus@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProfileRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 255))]
    pub full_name: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_invalid_email() {
        let req = RegisterRequest {
            email: "not-an-email".into(),
            username: "matheus_dias".into(),
            password: "senha123".into(),
            full_name: None,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn register_rejects_short_password() {
        let req = RegisterRequest {
            email: "matheus@example.com".into(),
            username: "matheus_dias".into(),
            password: "abc".into(),
            full_name: None,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn register_accepts_valid_payload() {
        let req = RegisterRequest {
            email: "matheus@example.com".into(),
            username: "matheus_dias".into(),
            password: "senha123".into(),
            full_name: Some("Matheus Dias".into()),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn profile_update_skips_absent_fields() {
        let req = UpdateProfileRequest {
            email: None,
            username: None,
            full_name: None,
            password: None,
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn profile_update_rejects_short_username() {
        let req = UpdateProfileRequest {
            email: None,
            username: Some("ab".into()),
            full_name: None,
            password: None,
        };

        assert!(req.validate().is_err());
    }
}
