//! Risk register endpoints.
//!
//! Revision comparison sends the requested revision numbers verbatim;
//! whether they exist is the server's call to make.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult, Query};
use crate::models::risk::*;

pub async fn list_risks(
    conn: &ConnectionState,
    status: &str,
    category: &str,
    owner: &str,
    search: &str,
) -> ApiResult<Vec<RiskAssessment>> {
    let query = Query::new()
        .push("status", status)
        .push("category", category)
        .push("owner", owner)
        .push("search", search)
        .into_string();
    http::get_json(conn, &format!("/risks{query}")).await
}

pub async fn get_risk(
    conn: &ConnectionState,
    risk_id: &str,
    include_trend: bool,
) -> ApiResult<RiskAssessment> {
    let query = if include_trend { "?include_trend=true" } else { "" };
    http::get_json(conn, &format!("/risks/{risk_id}{query}")).await
}

pub async fn create_risk(conn: &ConnectionState, payload: &RiskCreate) -> ApiResult<RiskAssessment> {
    http::post_json(conn, "/risks", payload).await
}

pub async fn update_risk(
    conn: &ConnectionState,
    risk_id: &str,
    payload: &RiskUpdate,
) -> ApiResult<RiskAssessment> {
    http::patch_json(conn, &format!("/risks/{risk_id}"), payload).await
}

pub async fn list_risk_revisions(
    conn: &ConnectionState,
    risk_id: &str,
) -> ApiResult<Vec<RiskRevision>> {
    http::get_json(conn, &format!("/risks/{risk_id}/revisions")).await
}

pub async fn compare_risk_revisions(
    conn: &ConnectionState,
    risk_id: &str,
    rev_a: i64,
    rev_b: i64,
) -> ApiResult<RiskCompareResponse> {
    http::get_json(conn, &format!("/risks/{risk_id}/compare?rev_a={rev_a}&rev_b={rev_b}")).await
}

pub async fn risk_matrix(conn: &ConnectionState) -> ApiResult<RiskMatrixSummary> {
    http::get_json(conn, "/risks/matrix").await
}

pub async fn risk_trends(
    conn: &ConnectionState,
    risk_id: Option<&str>,
    limit: u32,
) -> ApiResult<RiskTrendResponse> {
    let query = Query::new()
        .push_opt("risk_id", risk_id)
        .push("limit", limit.to_string())
        .into_string();
    http::get_json(conn, &format!("/risks/trends{query}")).await
}

pub async fn risk_custom_report(conn: &ConnectionState, risk_id: &str) -> ApiResult<RiskReport> {
    let query = Query::new().push("risk_id", risk_id).into_string();
    http::get_json(conn, &format!("/risks/reports/custom{query}")).await
}

pub async fn get_risk_settings(conn: &ConnectionState) -> ApiResult<RiskSettings> {
    http::get_json(conn, "/risk/settings").await
}

pub async fn update_risk_settings(
    conn: &ConnectionState,
    payload: &RiskSettings,
) -> ApiResult<RiskSettings> {
    http::put_json(conn, "/risk/settings", payload).await
}
