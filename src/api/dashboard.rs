//! Dashboard and notification endpoints.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult};
use crate::models::dashboard::{DashboardOverview, Notification};

pub async fn dashboard_overview(conn: &ConnectionState) -> ApiResult<DashboardOverview> {
    http::get_json(conn, "/dashboard/overview").await
}

pub async fn list_notifications(conn: &ConnectionState) -> ApiResult<Vec<Notification>> {
    http::get_json(conn, "/notifications").await
}

pub async fn mark_notification_read(
    conn: &ConnectionState,
    notification_id: &str,
) -> ApiResult<()> {
    http::put_empty_unit(conn, &format!("/notifications/{notification_id}/read")).await
}
