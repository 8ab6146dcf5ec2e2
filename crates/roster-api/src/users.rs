use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, error};

use roster_db::{CreateOutcome, Database};
use roster_types::api::{
    CreateUserRequest, CreateUserResponse, UserListResponse, UserResponse, ValidationError,
};
use roster_types::models::User;

use crate::AppState;
use crate::error::ApiError;

/// Run a store call off the async runtime. The connection it opens lives
/// only inside the blocking task.
async fn run_db<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Storage(e.into())
        })?
        .map_err(ApiError::Storage)
}

/// GET /users — newest first.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UserListResponse>, ApiError> {
    let rows = run_db(&state, |db| db.list_users()).await?;
    let users: Vec<User> = rows.into_iter().map(User::from).collect();

    Ok(Json(UserListResponse {
        count: users.len(),
        users,
    }))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|e| {
        debug!("Rejected create body: {}", e);
        ValidationError::MalformedBody
    })?;
    let new_user = req.validate()?;

    match run_db(&state, move |db| db.create_user(&new_user)).await? {
        CreateOutcome::Created(row) => Ok((
            StatusCode::CREATED,
            Json(CreateUserResponse {
                message: "User created successfully".into(),
                user: row.into(),
            }),
        )),
        CreateOutcome::EmailTaken => Err(ApiError::EmailTaken),
    }
}

/// GET /users/{id} — a non-integer id is treated as an unmatched route.
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::RouteNotFound)?;

    let row = run_db(&state, move |db| db.get_user(id))
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(UserResponse { user: row.into() }))
}
