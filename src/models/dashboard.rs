//! Dashboard overview and notifications.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardWorkItem {
    pub id: String,
    pub module: String,
    pub title: String,
    pub code: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardSection {
    pub total: i64,
    pub open: i64,
    pub pending: i64,
    #[serde(default)]
    pub items: Vec<DashboardWorkItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardOverview {
    pub documents: DashboardSection,
    pub complaints: DashboardSection,
    pub capas: DashboardSection,
    pub dof: DashboardSection,
    pub notifications: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    /// info, warning, error, success
    #[serde(rename = "type")]
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
