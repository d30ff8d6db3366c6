//! Complaint endpoints.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult, Query};
use crate::models::capa::Capa;
use crate::models::complaint::*;
use crate::models::dof::DofTask;

pub async fn list_complaints(
    conn: &ConnectionState,
    status: &str,
    priority: &str,
    category_id: &str,
    search: &str,
) -> ApiResult<Vec<Complaint>> {
    let query = Query::new()
        .push("status", status)
        .push("priority", priority)
        .push("category_id", category_id)
        .push("search", search)
        .into_string();
    http::get_json(conn, &format!("/complaints{query}")).await
}

pub async fn get_complaint(conn: &ConnectionState, complaint_id: &str) -> ApiResult<Complaint> {
    http::get_json(conn, &format!("/complaints/{complaint_id}")).await
}

pub async fn create_complaint(
    conn: &ConnectionState,
    payload: &ComplaintCreate,
) -> ApiResult<Complaint> {
    http::post_json(conn, "/complaints", payload).await
}

pub async fn set_complaint_status(
    conn: &ConnectionState,
    complaint_id: &str,
    payload: &ComplaintStatusUpdate,
) -> ApiResult<()> {
    http::put_unit(conn, &format!("/complaints/{complaint_id}/status"), payload).await
}

pub async fn update_assignment(
    conn: &ConnectionState,
    complaint_id: &str,
    payload: &ComplaintAssignmentUpdate,
) -> ApiResult<Complaint> {
    http::patch_json(conn, &format!("/complaints/{complaint_id}/assignment"), payload).await
}

pub async fn update_investigation(
    conn: &ConnectionState,
    complaint_id: &str,
    payload: &ComplaintInvestigationUpdate,
) -> ApiResult<Complaint> {
    http::patch_json(conn, &format!("/complaints/{complaint_id}/investigation"), payload).await
}

pub async fn finalize_complaint(
    conn: &ConnectionState,
    complaint_id: &str,
    payload: &ComplaintFinalizationUpdate,
) -> ApiResult<Complaint> {
    http::patch_json(conn, &format!("/complaints/{complaint_id}/finalize"), payload).await
}

pub async fn add_complaint_attachments(
    conn: &ConnectionState,
    complaint_id: &str,
    file_ids: Vec<String>,
) -> ApiResult<Complaint> {
    let payload = ComplaintAttachmentAdd { file_ids };
    http::post_json(conn, &format!("/complaints/{complaint_id}/attachments"), &payload).await
}

/// Spawn a DÖF task linked back to the complaint.
pub async fn create_complaint_dof(
    conn: &ConnectionState,
    complaint_id: &str,
    payload: &ComplaintDofCreate,
) -> ApiResult<DofTask> {
    http::post_json(conn, &format!("/complaints/{complaint_id}/dof"), payload).await
}

/// Spawn a CAPA linked back to the complaint.
pub async fn create_complaint_capa(
    conn: &ConnectionState,
    complaint_id: &str,
    payload: &ComplaintCapaCreate,
) -> ApiResult<Capa> {
    http::post_json(conn, &format!("/complaints/{complaint_id}/capas"), payload).await
}

pub async fn list_complaint_categories(
    conn: &ConnectionState,
) -> ApiResult<Vec<ComplaintCategory>> {
    http::get_json(conn, "/complaint-categories").await
}

pub async fn create_complaint_category(
    conn: &ConnectionState,
    payload: &ComplaintCategoryCreate,
) -> ApiResult<ComplaintCategory> {
    http::post_json(conn, "/complaint-categories", payload).await
}

pub async fn update_complaint_category(
    conn: &ConnectionState,
    category_id: &str,
    payload: &ComplaintCategoryUpdate,
) -> ApiResult<ComplaintCategory> {
    http::patch_json(conn, &format!("/complaint-categories/{category_id}"), payload).await
}

pub async fn complaint_category_report(conn: &ConnectionState) -> ApiResult<CategoryReport> {
    http::get_json(conn, "/complaints/report/categories").await
}
