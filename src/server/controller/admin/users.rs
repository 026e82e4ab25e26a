use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto, UserListDto},
    },
    server::{
        controller::admin::ADMIN_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Create an account with any combination of roles.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid or already taken fields
/// - `401 Unauthorized` - Not an admin
#[utoipa::path(
    post,
    path = "/admin/create-user",
    tag = ADMIN_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user_service = UserService::new(&state.db);

    let _ = auth_guard.require(&[Permission::Admin]).await?;

    let user = user_service
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update an account. Omitted fields keep their value; a new password is re-hashed.
#[utoipa::path(
    post,
    path = "/admin/edit-user/{user_id}",
    tag = ADMIN_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user_service = UserService::new(&state.db);

    let _ = auth_guard.require(&[Permission::Admin]).await?;

    let user = user_service
        .update(UpdateUserParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete an account. Admins cannot delete themselves.
#[utoipa::path(
    delete,
    path = "/admin/delete-user/{user_id}",
    tag = ADMIN_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Attempt to delete own account", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user_service = UserService::new(&state.db);

    let ctx = auth_guard.require(&[Permission::Admin]).await?;

    user_service.delete(user_id, ctx.user_id()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List every account.
#[utoipa::path(
    get,
    path = "/admin/get-users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Users", body = UserListDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user_service = UserService::new(&state.db);

    let _ = auth_guard.require(&[Permission::Admin]).await?;

    let users = user_service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            users: users.into_iter().map(User::into_dto).collect(),
        }),
    ))
}
