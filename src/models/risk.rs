//! Risk register types: assessments, revisions, matrix and trend summaries.
//!
//! Scores, levels and diffs are computed server-side; the client only
//! carries them for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Free-form key metric attached to a risk. Weight defaults to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub value: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskScore {
    pub inherent: f64,
    pub residual: f64,
    pub inherent_level: String,
    pub residual_level: String,
    pub matrix_row: i32,
    pub matrix_col: i32,
}

/// One historical snapshot of a risk, taken before each update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskRevision {
    pub revision_no: i64,
    pub snapshot: serde_json::Value,
    pub changed_by: String,
    pub changed_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskTrendPoint {
    pub recorded_at: DateTime<Utc>,
    pub inherent_score: f64,
    pub residual_score: f64,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "identified".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskAssessment {
    pub id: String,
    pub risk_code: String,
    pub title: String,
    pub category: String,
    pub process: Option<String>,
    pub owner: String,
    pub description: Option<String>,
    pub status: String,
    pub likelihood: f64,
    pub impact: f64,
    pub detection: Option<f64>,
    pub controls_effectiveness: Option<f64>,
    #[serde(default)]
    pub custom_factors: Vec<RiskFactor>,
    pub risk_score: RiskScore,
    #[serde(default)]
    pub linked_capa_ids: Vec<String>,
    #[serde(default)]
    pub linked_audit_finding_ids: Vec<String>,
    pub next_review_date: Option<DateTime<Utc>>,
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub revisions: Vec<RiskRevision>,
    #[serde(default)]
    pub trend: Vec<RiskTrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskMatrixCell {
    pub row: i32,
    pub col: i32,
    pub level: String,
    pub color: String,
    pub label: String,
    #[serde(default)]
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskMatrixSummary {
    pub matrix: Vec<Vec<RiskMatrixCell>>,
    #[serde(default)]
    pub palette: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskTrendResponse {
    #[serde(default)]
    pub points: Vec<RiskTrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSettings {
    pub id: String,
    pub formula: String,
    pub residual_formula: Option<String>,
    pub max_scale: i32,
    pub thresholds: BTreeMap<String, f64>,
    pub matrix: Vec<Vec<String>>,
    pub palette: HashMap<String, String>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskCreate {
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    pub likelihood: f64,
    pub impact: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls_effectiveness: Option<f64>,
    pub custom_factors: Vec<RiskFactor>,
    pub linked_capa_ids: Vec<String>,
    pub linked_audit_finding_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RiskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls_effectiveness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_factors: Option<Vec<RiskFactor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_capa_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_audit_finding_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_note: Option<String>,
}

/// A single changed field in a revision comparison.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldChange {
    pub from: serde_json::Value,
    pub to: serde_json::Value,
}

/// `GET /risks/{id}/compare?rev_a&rev_b` — diff is computed server-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskCompareResponse {
    pub risk_id: String,
    pub base_revision: i64,
    pub target_revision: i64,
    #[serde(default)]
    pub diff: BTreeMap<String, FieldChange>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskReport {
    pub template_name: String,
    pub generated_at: DateTime<Utc>,
    pub risk_id: String,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_weight_defaults_to_one() {
        let factor: RiskFactor =
            serde_json::from_str(r#"{"name":"turnover","value":3.0}"#).unwrap();
        assert_eq!(factor.weight, 1.0);
    }

    #[test]
    fn update_payload_only_serializes_set_fields() {
        let payload = RiskUpdate {
            status: Some("monitoring".to_string()),
            likelihood: Some(4.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("status"));
        assert!(object.contains_key("likelihood"));
    }

    #[test]
    fn compare_response_decodes_diff_entries() {
        let raw = r#"{
            "risk_id": "r-1",
            "base_revision": 1,
            "target_revision": 3,
            "diff": {
                "likelihood": {"from": 2.0, "to": 4.0},
                "owner": {"from": "a", "to": "b"}
            }
        }"#;
        let decoded: RiskCompareResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.base_revision, 1);
        assert_eq!(decoded.target_revision, 3);
        assert_eq!(decoded.diff.len(), 2);
        assert_eq!(
            decoded.diff["owner"].to,
            serde_json::Value::String("b".to_string())
        );
    }

    #[test]
    fn trend_point_status_defaults() {
        let point: RiskTrendPoint = serde_json::from_str(
            r#"{"recorded_at":"2024-05-01T10:00:00Z","inherent_score":12.0,"residual_score":6.0}"#,
        )
        .unwrap();
        assert_eq!(point.status, "identified");
    }
}
