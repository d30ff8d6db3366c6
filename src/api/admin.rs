//! Role and user administration endpoints.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult};
use crate::models::user::{RoleCreate, RoleUpdate, User, UserListItem, UserRole, UserUpdate};

pub async fn list_roles(conn: &ConnectionState) -> ApiResult<Vec<UserRole>> {
    http::get_json(conn, "/roles").await
}

pub async fn create_role(conn: &ConnectionState, payload: &RoleCreate) -> ApiResult<UserRole> {
    http::post_json(conn, "/roles", payload).await
}

pub async fn update_role(
    conn: &ConnectionState,
    role_name: &str,
    payload: &RoleUpdate,
) -> ApiResult<UserRole> {
    http::patch_json(conn, &format!("/roles/{role_name}"), payload).await
}

pub async fn delete_role(conn: &ConnectionState, role_name: &str) -> ApiResult<()> {
    http::delete(conn, &format!("/roles/{role_name}")).await
}

pub async fn list_users(conn: &ConnectionState) -> ApiResult<Vec<UserListItem>> {
    http::get_json(conn, "/users").await
}

pub async fn update_user(
    conn: &ConnectionState,
    user_id: &str,
    payload: &UserUpdate,
) -> ApiResult<User> {
    http::patch_json(conn, &format!("/users/{user_id}"), payload).await
}
