use serde::{Deserialize, Serialize};

/// Internal payload for user rows. The password field is already hashed by
/// the time it reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserData {
    pub email: String,
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserData {
    pub user_id: i32,
    pub email: Option<String>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
}
