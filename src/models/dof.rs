//! DÖF tasks (lightweight corrective/preventive task records).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DofStatusEntry {
    pub status: String,
    pub changed_by: String,
    pub changed_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DofTask {
    pub id: String,
    pub dof_no: String,
    pub title: String,
    pub description: Option<String>,
    pub department: String,
    pub responsible_person: String,
    pub due_date: DateTime<Utc>,
    /// open, in_progress, pending_closure, closed, cancelled
    pub status: String,
    #[serde(default)]
    pub team_members: Vec<String>,
    pub initial_improvement_report_date: Option<DateTime<Utc>>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status_history: Vec<DofStatusEntry>,
    pub closure_requested_at: Option<DateTime<Utc>>,
    pub closure_requested_by: Option<String>,
    pub closure_request_note: Option<String>,
    pub closure_approved_at: Option<DateTime<Utc>>,
    pub closure_approved_by: Option<String>,
    pub closure_decision_note: Option<String>,
}

/// Paged list envelope returned by `GET /dof-tasks`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DofTaskList {
    #[serde(default)]
    pub items: Vec<DofTask>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DofTaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub department: String,
    pub responsible_person: String,
    pub due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_improvement_report_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DofTaskUpdate {
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

#[derive(Debug, Clone, Serialize)]
pub struct DofClosureRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DofClosureDecision {
    pub approve: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DofStatusUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DofDeadlineRow {
    pub id: String,
    pub dof_no: String,
    pub title: String,
    pub due_date: DateTime<Utc>,
    pub department: String,
    pub responsible_person: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DofDepartmentCount {
    #[serde(rename = "_id")]
    pub department: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DofMonthlyTrend {
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DofSummaryReport {
    pub total: i64,
    #[serde(default)]
    pub status_counts: HashMap<String, i64>,
    #[serde(default)]
    pub department_counts: Vec<DofDepartmentCount>,
    pub overdue: i64,
    #[serde(default)]
    pub upcoming_deadlines: Vec<DofDeadlineRow>,
    #[serde(default)]
    pub monthly_trends: Vec<DofMonthlyTrend>,
}
