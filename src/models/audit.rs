//! Audit plans, findings and the audit question bank.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTeamMember {
    pub user_id: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditChecklistItem {
    #[serde(skip_serializing)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// pending, compliant, noncompliant, not_applicable
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuditStatusEntry {
    pub status: String,
    pub changed_by: String,
    pub changed_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuditFinding {
    pub id: String,
    /// observation, minor, major, critical
    pub finding_type: String,
    pub description: String,
    pub requirement_reference: Option<String>,
    pub related_capa_id: Option<String>,
    pub status: String,
    pub corrective_action: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Audit {
    pub id: String,
    pub audit_code: String,
    pub audit_type: String,
    pub scope: String,
    pub department: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub lead_auditor: String,
    #[serde(default)]
    pub audit_team: Vec<AuditTeamMember>,
    pub auditee_representative: Option<String>,
    pub objectives: Option<String>,
    #[serde(default)]
    pub checklist: Vec<AuditChecklistItem>,
    #[serde(default)]
    pub findings: Vec<AuditFinding>,
    #[serde(default)]
    pub status_history: Vec<AuditStatusEntry>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditCreate {
    pub audit_type: String,
    pub scope: String,
    pub department: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub lead_auditor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_team: Option<Vec<AuditTeamMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditee_representative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objectives: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<AuditChecklistItem>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_auditor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditee_representative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objectives: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditStatusUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditFindingCreate {
    pub finding_type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_capa_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrective_action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditFindingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_capa_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrective_action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuditQuestion {
    pub id: String,
    pub question: String,
    pub category: Option<String>,
    pub requirement_reference: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditQuestionCreate {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditQuestionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
