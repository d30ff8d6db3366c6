//! CAPA records and their corrective/preventive actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CapaAction {
    pub id: String,
    pub action_description: String,
    pub responsible_person: String,
    pub due_date: DateTime<Utc>,
    pub status: String,
    pub completion_date: Option<DateTime<Utc>>,
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Capa {
    pub id: String,
    pub capa_no: String,
    pub title: String,
    pub source: String,
    pub department: String,
    pub initiated_by: String,
    pub team_leader: String,
    pub initiated_date: DateTime<Utc>,
    pub target_date: Option<DateTime<Utc>>,
    pub status: String,
    pub nonconformity_description: String,
    pub root_cause_analysis: Option<String>,
    pub immediate_action: Option<String>,
    #[serde(default)]
    pub corrective_actions: Vec<CapaAction>,
    #[serde(default)]
    pub preventive_actions: Vec<CapaAction>,
    pub effectiveness_review: Option<String>,
    #[serde(default)]
    pub file_attachments: Vec<String>,
    #[serde(default)]
    pub team_members: Vec<String>,
    #[serde(default)]
    pub linked_risk_ids: Vec<String>,
    #[serde(default)]
    pub linked_equipment_ids: Vec<String>,
    #[serde(default)]
    pub linked_audit_finding_ids: Vec<String>,
    pub closure_requested_at: Option<DateTime<Utc>>,
    pub closure_requested_by: Option<String>,
    pub closure_request_note: Option<String>,
    pub closure_approved_at: Option<DateTime<Utc>>,
    pub closure_approved_by: Option<String>,
    pub closure_decision_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CapaCreate {
    pub title: String,
    pub source: String,
    pub department: String,
    pub team_leader: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    pub nonconformity_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_risk_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_audit_finding_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CapaUpdate {
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
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonconformity_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_cause_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediate_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effectiveness_review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CapaClosureRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CapaClosureDecision {
    pub approve: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// `action_type` selects the corrective or preventive list.
#[derive(Debug, Clone, Serialize)]
pub struct CapaActionCreate {
    pub action_description: String,
    pub responsible_person: String,
    pub due_date: DateTime<Utc>,
    pub action_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CapaActionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // A past due date is sent exactly as entered; overdue handling is
    // server-side.
    #[test]
    fn action_create_keeps_past_due_dates() {
        let payload = CapaActionCreate {
            action_description: "Replace gasket".to_string(),
            responsible_person: "u-7".to_string(),
            due_date: Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap(),
            action_type: "corrective".to_string(),
            status: "open".to_string(),
            evidence: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["due_date"], "2020-01-15T00:00:00Z");
        assert_eq!(value["action_type"], "corrective");
        assert!(value.get("evidence").is_none());
    }
}
