//! DÖF task endpoints.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult, Query};
use crate::models::dof::*;

pub async fn list_dof_tasks(
    conn: &ConnectionState,
    department: &str,
    status: &str,
    search: &str,
    page: i64,
    page_size: i64,
) -> ApiResult<DofTaskList> {
    let query = Query::new()
        .push("department", department)
        .push("status", status)
        .push("search", search)
        .push("page", page.to_string())
        .push("page_size", page_size.to_string())
        .into_string();
    http::get_json(conn, &format!("/dof-tasks{query}")).await
}

pub async fn get_dof_task(conn: &ConnectionState, dof_id: &str) -> ApiResult<DofTask> {
    http::get_json(conn, &format!("/dof-tasks/{dof_id}")).await
}

pub async fn create_dof_task(conn: &ConnectionState, payload: &DofTaskCreate) -> ApiResult<DofTask> {
    http::post_json(conn, "/dof-tasks", payload).await
}

pub async fn update_dof_task(
    conn: &ConnectionState,
    dof_id: &str,
    payload: &DofTaskUpdate,
) -> ApiResult<DofTask> {
    http::put_json(conn, &format!("/dof-tasks/{dof_id}"), payload).await
}

pub async fn set_dof_status(
    conn: &ConnectionState,
    dof_id: &str,
    payload: &DofStatusUpdate,
) -> ApiResult<DofTask> {
    http::patch_json(conn, &format!("/dof-tasks/{dof_id}/status"), payload).await
}

pub async fn request_dof_closure(
    conn: &ConnectionState,
    dof_id: &str,
    note: Option<&str>,
) -> ApiResult<DofTask> {
    let payload = DofClosureRequest {
        note: note.map(str::to_string),
    };
    http::post_json(conn, &format!("/dof-tasks/{dof_id}/closure/request"), &payload).await
}

pub async fn decide_dof_closure(
    conn: &ConnectionState,
    dof_id: &str,
    approve: bool,
    note: Option<&str>,
) -> ApiResult<DofTask> {
    let payload = DofClosureDecision {
        approve,
        note: note.map(str::to_string),
    };
    http::post_json(conn, &format!("/dof-tasks/{dof_id}/closure/decision"), &payload).await
}

pub async fn dof_departments(conn: &ConnectionState) -> ApiResult<Vec<String>> {
    http::get_json(conn, "/dof-tasks/departments").await
}

pub async fn dof_summary_report(
    conn: &ConnectionState,
    department: &str,
    status: &str,
) -> ApiResult<DofSummaryReport> {
    let query = Query::new()
        .push("department", department)
        .push("status", status)
        .into_string();
    http::get_json(conn, &format!("/dof-tasks/report/summary{query}")).await
}
