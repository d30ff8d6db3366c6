//! CAPA endpoints.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult, Query};
use crate::models::capa::*;

pub async fn list_capas(
    conn: &ConnectionState,
    status: &str,
    department: &str,
    search: &str,
) -> ApiResult<Vec<Capa>> {
    let query = Query::new()
        .push("status", status)
        .push("department", department)
        .push("search", search)
        .into_string();
    http::get_json(conn, &format!("/capas{query}")).await
}

pub async fn get_capa(conn: &ConnectionState, capa_id: &str) -> ApiResult<Capa> {
    http::get_json(conn, &format!("/capas/{capa_id}")).await
}

pub async fn create_capa(conn: &ConnectionState, payload: &CapaCreate) -> ApiResult<Capa> {
    http::post_json(conn, "/capas", payload).await
}

pub async fn update_capa(
    conn: &ConnectionState,
    capa_id: &str,
    payload: &CapaUpdate,
) -> ApiResult<Capa> {
    http::patch_json(conn, &format!("/capas/{capa_id}"), payload).await
}

pub async fn add_capa_action(
    conn: &ConnectionState,
    capa_id: &str,
    payload: &CapaActionCreate,
) -> ApiResult<Capa> {
    http::post_json(conn, &format!("/capas/{capa_id}/actions"), payload).await
}

pub async fn update_capa_action(
    conn: &ConnectionState,
    capa_id: &str,
    action_id: &str,
    payload: &CapaActionUpdate,
) -> ApiResult<Capa> {
    http::patch_json(conn, &format!("/capas/{capa_id}/actions/{action_id}"), payload).await
}

pub async fn request_capa_closure(
    conn: &ConnectionState,
    capa_id: &str,
    note: Option<&str>,
) -> ApiResult<Capa> {
    let payload = CapaClosureRequest {
        note: note.map(str::to_string),
    };
    http::post_json(conn, &format!("/capas/{capa_id}/closure/request"), &payload).await
}

pub async fn decide_capa_closure(
    conn: &ConnectionState,
    capa_id: &str,
    approve: bool,
    note: Option<&str>,
) -> ApiResult<Capa> {
    let payload = CapaClosureDecision {
        approve,
        note: note.map(str::to_string),
    };
    http::post_json(conn, &format!("/capas/{capa_id}/closure/decision"), &payload).await
}
