use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{NewUser, User};

pub const SERVICE_VERSION: &str = "1.0.0";

// -- Discovery --

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Endpoints {
    pub health: String,
    pub users: String,
    pub user_by_id: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: "Roster user API for Docker & Kubernetes learning".into(),
            endpoints: Endpoints {
                health: "/health".into(),
                users: "/users (GET, POST)".into(),
                user_by_id: "/users/{id} (GET)".into(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

// -- Users --

/// Body of `POST /users`.
///
/// Both fields are optional here so that a missing key can be told apart
/// from a body that isn't the right shape at all.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request body must be a JSON object with name and email")]
    MalformedBody,
    #[error("Name and email are required")]
    MissingFields,
    #[error("Name and email cannot be empty")]
    EmptyFields,
}

impl CreateUserRequest {
    /// Checks field presence, then trims and rejects blank values.
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        let (Some(name), Some(email)) = (self.name, self.email) else {
            return Err(ValidationError::MissingFields);
        };

        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(ValidationError::EmptyFields);
        }

        Ok(NewUser {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
