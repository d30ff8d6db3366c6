//! Document management types: folders, documents, approvals, read receipts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderPermission {
    /// One of `user`, `role`, `department`, `group`
    pub principal_type: String,
    pub principal_id: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFolder {
    pub id: String,
    pub name: String,
    pub code_prefix: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub auto_code_pattern: String,
    pub auto_code_seq: i64,
    #[serde(default)]
    pub permissions: Vec<FolderPermission>,
    /// Capabilities of the requesting user, computed server-side.
    #[serde(default)]
    pub current_user_capabilities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentFolderCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub permissions: Vec<FolderPermission>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentFolderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDistribution {
    pub principal_type: String,
    pub principal_id: String,
    pub required_to_read: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StageDecision {
    pub user_id: String,
    pub decision: String,
    pub comment: Option<String>,
    pub decided_at: DateTime<Utc>,
    pub matched_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentApprovalStage {
    pub stage: i32,
    pub approvers: Vec<String>,
    /// `all` or `any`
    #[serde(default = "default_approval_type")]
    pub approval_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default = "default_pending")]
    pub status: String,
    #[serde(skip_serializing, default)]
    pub decided_by: Option<String>,
    #[serde(skip_serializing, default)]
    pub decided_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing, default)]
    pub comment: Option<String>,
    #[serde(skip_serializing, default)]
    pub decisions: Vec<StageDecision>,
}

fn default_approval_type() -> String {
    "all".to_string()
}

fn default_pending() -> String {
    "pending".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentReadReceipt {
    pub user_id: String,
    pub required: bool,
    pub status: String,
    pub read_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentStatusEntry {
    pub status: String,
    pub changed_by: String,
    pub changed_at: DateTime<Utc>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentVersion {
    pub id: String,
    pub version: String,
    pub changes: Option<String>,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub file_id: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub id: String,
    pub folder_id: String,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub document_type: String,
    pub department: Option<String>,
    pub status: String,
    pub author_id: String,
    pub version: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub distribution_list: Vec<DocumentDistribution>,
    #[serde(default)]
    pub approval_matrix: Vec<DocumentApprovalStage>,
    #[serde(default)]
    pub read_receipts: Vec<DocumentReadReceipt>,
    #[serde(default)]
    pub status_history: Vec<DocumentStatusEntry>,
    #[serde(default)]
    pub version_history: Vec<DocumentVersion>,
    pub current_version_id: Option<String>,
    pub review_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentCreate {
    pub folder_id: String,
    pub title: String,
    pub document_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub distribution_list: Vec<DocumentDistribution>,
    pub approval_matrix: Vec<DocumentApprovalStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApprovalDecision {
    pub stage: i32,
    pub decision: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadAcknowledge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Pending approval task row for the current user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentApprovalTask {
    pub document_id: String,
    pub document_code: String,
    pub title: String,
    pub stage: i32,
    pub approval_type: String,
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentStatusReport {
    pub total: i64,
    #[serde(default)]
    pub status_counts: HashMap<String, i64>,
    #[serde(default)]
    pub department_counts: HashMap<String, i64>,
    #[serde(default)]
    pub type_counts: HashMap<String, i64>,
}

/// `GET /documents/{id}/preview`: kind is html, slides, text or binary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentPreview {
    pub kind: String,
    pub content: Option<String>,
    pub slides: Option<Vec<String>>,
    pub mime_type: Option<String>,
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileMetadata {
    pub id: String,
    pub original_filename: String,
    pub mime_type: String,
    pub file_size: i64,
    pub download_url: String,
}
