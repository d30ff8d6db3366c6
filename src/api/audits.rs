//! Audit endpoints.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult, Query};
use crate::models::audit::*;

pub async fn list_audits(
    conn: &ConnectionState,
    status: &str,
    audit_type: &str,
    department: &str,
    search: &str,
) -> ApiResult<Vec<Audit>> {
    let query = Query::new()
        .push("status", status)
        .push("audit_type", audit_type)
        .push("department", department)
        .push("search", search)
        .into_string();
    http::get_json(conn, &format!("/audits{query}")).await
}

pub async fn get_audit(conn: &ConnectionState, audit_id: &str) -> ApiResult<Audit> {
    http::get_json(conn, &format!("/audits/{audit_id}")).await
}

pub async fn create_audit(conn: &ConnectionState, payload: &AuditCreate) -> ApiResult<Audit> {
    http::post_json(conn, "/audits", payload).await
}

pub async fn update_audit(
    conn: &ConnectionState,
    audit_id: &str,
    payload: &AuditUpdate,
) -> ApiResult<Audit> {
    http::patch_json(conn, &format!("/audits/{audit_id}"), payload).await
}

pub async fn set_audit_status(
    conn: &ConnectionState,
    audit_id: &str,
    payload: &AuditStatusUpdate,
) -> ApiResult<Audit> {
    http::post_json(conn, &format!("/audits/{audit_id}/status"), payload).await
}

pub async fn add_audit_finding(
    conn: &ConnectionState,
    audit_id: &str,
    payload: &AuditFindingCreate,
) -> ApiResult<Audit> {
    http::post_json(conn, &format!("/audits/{audit_id}/findings"), payload).await
}

pub async fn update_audit_finding(
    conn: &ConnectionState,
    audit_id: &str,
    finding_id: &str,
    payload: &AuditFindingUpdate,
) -> ApiResult<Audit> {
    http::patch_json(conn, &format!("/audits/{audit_id}/findings/{finding_id}"), payload).await
}

pub async fn list_audit_questions(
    conn: &ConnectionState,
    category: &str,
    search: &str,
) -> ApiResult<Vec<AuditQuestion>> {
    let query = Query::new()
        .push("category", category)
        .push("search", search)
        .into_string();
    http::get_json(conn, &format!("/audit-questions{query}")).await
}

pub async fn create_audit_question(
    conn: &ConnectionState,
    payload: &AuditQuestionCreate,
) -> ApiResult<AuditQuestion> {
    http::post_json(conn, "/audit-questions", payload).await
}

pub async fn update_audit_question(
    conn: &ConnectionState,
    question_id: &str,
    payload: &AuditQuestionUpdate,
) -> ApiResult<AuditQuestion> {
    http::patch_json(conn, &format!("/audit-questions/{question_id}"), payload).await
}

pub async fn delete_audit_question(conn: &ConnectionState, question_id: &str) -> ApiResult<()> {
    http::delete(conn, &format!("/audit-questions/{question_id}")).await
}
