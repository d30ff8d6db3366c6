//! Equipment calibration endpoints.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult, Query};
use crate::models::calibration::*;

pub async fn list_devices(
    conn: &ConnectionState,
    status: &str,
    category: &str,
    department: &str,
    search: &str,
) -> ApiResult<Vec<CalibrationDevice>> {
    let query = Query::new()
        .push("status", status)
        .push("category", category)
        .push("department", department)
        .push("search", search)
        .into_string();
    http::get_json(conn, &format!("/calibration/devices{query}")).await
}

pub async fn get_device(conn: &ConnectionState, device_id: &str) -> ApiResult<CalibrationDevice> {
    http::get_json(conn, &format!("/calibration/devices/{device_id}")).await
}

pub async fn create_device(
    conn: &ConnectionState,
    payload: &DeviceCreate,
) -> ApiResult<CalibrationDevice> {
    http::post_json(conn, "/calibration/devices", payload).await
}

pub async fn update_device(
    conn: &ConnectionState,
    device_id: &str,
    payload: &DeviceUpdate,
) -> ApiResult<CalibrationDevice> {
    http::patch_json(conn, &format!("/calibration/devices/{device_id}"), payload).await
}

pub async fn list_work_orders(
    conn: &ConnectionState,
    device_id: &str,
    status: &str,
) -> ApiResult<Vec<CalibrationWorkOrder>> {
    let query = Query::new()
        .push("device_id", device_id)
        .push("status", status)
        .into_string();
    http::get_json(conn, &format!("/calibration/work-orders{query}")).await
}

pub async fn get_work_order(
    conn: &ConnectionState,
    work_order_id: &str,
) -> ApiResult<CalibrationWorkOrder> {
    http::get_json(conn, &format!("/calibration/work-orders/{work_order_id}")).await
}

pub async fn create_work_order(
    conn: &ConnectionState,
    device_id: &str,
    payload: &WorkOrderCreate,
) -> ApiResult<CalibrationWorkOrder> {
    http::post_json(conn, &format!("/calibration/devices/{device_id}/work-orders"), payload).await
}

pub async fn update_work_order(
    conn: &ConnectionState,
    work_order_id: &str,
    payload: &WorkOrderUpdate,
) -> ApiResult<CalibrationWorkOrder> {
    http::patch_json(conn, &format!("/calibration/work-orders/{work_order_id}"), payload).await
}

pub async fn add_measurement(
    conn: &ConnectionState,
    work_order_id: &str,
    payload: &MeasurementCreate,
) -> ApiResult<CalibrationWorkOrder> {
    http::post_json(
        conn,
        &format!("/calibration/work-orders/{work_order_id}/measurements"),
        payload,
    )
    .await
}

pub async fn add_cost(
    conn: &ConnectionState,
    work_order_id: &str,
    payload: &CostCreate,
) -> ApiResult<CalibrationWorkOrder> {
    http::post_json(conn, &format!("/calibration/work-orders/{work_order_id}/costs"), payload).await
}

/// Generate work orders for devices whose due date is inside the notice
/// window. Returns the number created, but callers refetch anyway.
pub async fn run_work_order_scheduler(conn: &ConnectionState) -> ApiResult<serde_json::Value> {
    http::post_empty(conn, "/calibration/work-orders/scheduler/run").await
}

pub async fn calibration_summary(conn: &ConnectionState) -> ApiResult<CalibrationSummary> {
    http::get_json(conn, "/calibration/reports/summary").await
}
