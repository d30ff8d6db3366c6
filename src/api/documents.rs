//! Document management endpoints.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult, Query};
use crate::models::document::*;

pub async fn list_document_folders(conn: &ConnectionState) -> ApiResult<Vec<DocumentFolder>> {
    http::get_json(conn, "/document-folders").await
}

pub async fn create_document_folder(
    conn: &ConnectionState,
    payload: &DocumentFolderCreate,
) -> ApiResult<DocumentFolder> {
    http::post_json(conn, "/document-folders", payload).await
}

pub async fn update_document_folder(
    conn: &ConnectionState,
    folder_id: &str,
    payload: &DocumentFolderUpdate,
) -> ApiResult<DocumentFolder> {
    http::patch_json(conn, &format!("/document-folders/{folder_id}"), payload).await
}

pub async fn list_documents(
    conn: &ConnectionState,
    status: &str,
    document_type: &str,
    department: &str,
    folder_id: &str,
    search: &str,
) -> ApiResult<Vec<Document>> {
    let query = Query::new()
        .push("status", status)
        .push("document_type", document_type)
        .push("department", department)
        .push("folder_id", folder_id)
        .push("search", search)
        .into_string();
    http::get_json(conn, &format!("/documents{query}")).await
}

pub async fn get_document(conn: &ConnectionState, document_id: &str) -> ApiResult<Document> {
    http::get_json(conn, &format!("/documents/{document_id}")).await
}

pub async fn create_document(
    conn: &ConnectionState,
    payload: &DocumentCreate,
) -> ApiResult<Document> {
    http::post_json(conn, "/documents", payload).await
}

pub async fn update_document(
    conn: &ConnectionState,
    document_id: &str,
    payload: &DocumentUpdate,
) -> ApiResult<Document> {
    http::patch_json(conn, &format!("/documents/{document_id}"), payload).await
}

pub async fn get_document_preview(
    conn: &ConnectionState,
    document_id: &str,
) -> ApiResult<DocumentPreview> {
    http::get_json(conn, &format!("/documents/{document_id}/preview")).await
}

pub async fn get_document_file(
    conn: &ConnectionState,
    document_id: &str,
) -> ApiResult<FileMetadata> {
    http::get_json(conn, &format!("/documents/{document_id}/file")).await
}

pub async fn list_read_receipts(
    conn: &ConnectionState,
    document_id: &str,
) -> ApiResult<Vec<DocumentReadReceipt>> {
    http::get_json(conn, &format!("/documents/{document_id}/read-receipts")).await
}

pub async fn acknowledge_document(
    conn: &ConnectionState,
    document_id: &str,
    note: Option<&str>,
) -> ApiResult<Document> {
    let payload = ReadAcknowledge {
        note: note.map(str::to_string),
    };
    http::post_json(conn, &format!("/documents/{document_id}/acknowledge"), &payload).await
}

pub async fn pending_approvals(conn: &ConnectionState) -> ApiResult<Vec<DocumentApprovalTask>> {
    http::get_json(conn, "/documents/approvals/pending").await
}

pub async fn decide_approval(
    conn: &ConnectionState,
    document_id: &str,
    payload: &ApprovalDecision,
) -> ApiResult<Document> {
    http::post_json(conn, &format!("/documents/{document_id}/approvals/decision"), payload).await
}

pub async fn document_status_report(
    conn: &ConnectionState,
    department: &str,
    status: &str,
    document_type: &str,
) -> ApiResult<DocumentStatusReport> {
    let query = Query::new()
        .push("department", department)
        .push("status", status)
        .push("document_type", document_type)
        .into_string();
    http::get_json(conn, &format!("/documents/report/status{query}")).await
}

/// Absolute URL for the spreadsheet export of the status report; opened
/// in a new tab rather than fetched.
pub fn document_status_report_export_url(conn: &ConnectionState) -> String {
    format!("{}/documents/report/status/export", conn.api_url)
}
