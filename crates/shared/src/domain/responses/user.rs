use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            email: value.email,
            username: value.username,
            full_name: value.full_name,
            is_active: value.is_active,
            is_admin: value.is_admin,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_does_not_leak_password_hash() {
        let user = User {
            user_id: 1,
            email: "matheus@example.com".into(),
            username: "matheus_dias".into(),
            password: "$2b$04$secret-hash".into(),
            full_name: None,
            is_active: true,
            is_admin: false,
            created_at: None,
            updated_at: None,
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();

        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password"));
    }
}
