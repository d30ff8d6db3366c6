//! Complaint handling types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComplaintStatusEntry {
    pub status: String,
    pub changed_by: String,
    pub changed_at: DateTime<Utc>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComplaintCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintCategoryCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ComplaintCategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub complaint_no: String,
    pub customer_name: String,
    pub customer_contact: String,
    pub complaint_date: DateTime<Utc>,
    pub complaint_type: String,
    pub priority: String,
    pub status: String,
    pub description: String,
    pub department: String,
    pub assigned_to: Option<String>,
    pub team_leader: Option<String>,
    #[serde(default)]
    pub solution_team: Vec<String>,
    pub initial_response: Option<String>,
    pub investigation_report: Option<String>,
    pub investigation_reported_at: Option<DateTime<Utc>>,
    pub investigation_reported_by: Option<String>,
    #[serde(default)]
    pub related_task_ids: Vec<String>,
    #[serde(default)]
    pub related_capa_ids: Vec<String>,
    pub final_response: Option<String>,
    pub final_report: Option<String>,
    pub final_reported_at: Option<DateTime<Utc>>,
    pub resolution_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub file_attachments: Vec<String>,
    #[serde(default)]
    pub status_history: Vec<ComplaintStatusEntry>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintCreate {
    pub customer_name: String,
    pub customer_contact: String,
    pub complaint_type: String,
    pub priority: String,
    pub description: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_leader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_team: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ComplaintAssignmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_leader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_team: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_response: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintInvestigationUpdate {
    pub investigation_report: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_task_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_attachments: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintFinalizationUpdate {
    pub final_report: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_attachments: Option<Vec<String>>,
    pub mark_resolved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintStatusUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintAttachmentAdd {
    pub file_ids: Vec<String>,
}

/// Spawn a linked DÖF task from a complaint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComplaintDofCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<String>>,
}

/// Spawn a linked CAPA from a complaint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComplaintCapaCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_leader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonconformity_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryReportRow {
    pub category_id: Option<String>,
    pub category_name: String,
    pub count: i64,
    #[serde(default)]
    pub status_counts: HashMap<String, i64>,
    #[serde(default)]
    pub priority_counts: HashMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryReport {
    pub total: i64,
    #[serde(default)]
    pub categories: Vec<CategoryReportRow>,
}
