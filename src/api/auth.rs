//! Session endpoints.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult};
use crate::models::user::{LoginPayload, Token, User};

pub async fn login(conn: &ConnectionState, username: &str, password: &str) -> ApiResult<Token> {
    let payload = LoginPayload {
        username: username.to_string(),
        password: password.to_string(),
    };
    http::post_json(conn, "/auth/login", &payload).await
}

pub async fn current_user(conn: &ConnectionState) -> ApiResult<User> {
    http::get_json(conn, "/auth/me").await
}
