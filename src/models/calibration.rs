//! Equipment calibration: devices, work orders, measurements, costs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceStatusChange {
    pub status: String,
    pub changed_at: DateTime<Utc>,
    pub changed_by: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeasurementRecord {
    pub id: String,
    pub parameter: String,
    pub nominal: f64,
    pub tolerance: Option<f64>,
    pub observed: f64,
    pub pass_status: bool,
    pub recorded_at: DateTime<Utc>,
    pub recorded_by: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CostEntry {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub currency: String,
    pub incurred_at: DateTime<Utc>,
    pub supplier: Option<String>,
    pub reference: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalibrationWorkOrder {
    pub id: String,
    pub work_order_no: String,
    pub device_id: String,
    pub planned_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub status_history: Vec<DeviceStatusChange>,
    pub assigned_to: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub result: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub measurement_records: Vec<MeasurementRecord>,
    #[serde(default)]
    pub cost_entries: Vec<CostEntry>,
    pub linked_dof_task_id: Option<String>,
    #[serde(default)]
    pub linked_capa_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalibrationDevice {
    pub id: String,
    pub device_code: String,
    pub name: String,
    pub category: String,
    pub location: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub department: Option<String>,
    pub responsible_person: Option<String>,
    pub status: String,
    #[serde(default)]
    pub status_history: Vec<DeviceStatusChange>,
    pub calibration_interval_days: i64,
    pub last_calibrated_at: Option<DateTime<Utc>>,
    pub next_due_date: Option<DateTime<Utc>>,
    pub notice_days: i64,
    #[serde(default)]
    pub file_attachments: Vec<String>,
    #[serde(default)]
    pub linked_capa_ids: Vec<String>,
    #[serde(default)]
    pub linked_dof_task_ids: Vec<String>,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceCreate {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
    pub calibration_interval_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_calibrated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calibration_interval_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_calibrated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkOrderCreate {
    pub planned_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkOrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_dof_task_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeasurementCreate {
    pub parameter: String,
    pub nominal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    pub observed: f64,
    pub pass_status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostCreate {
    pub description: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalibrationSummary {
    pub total_devices: i64,
    pub active_devices: i64,
    pub overdue_devices: i64,
    pub upcoming_devices: i64,
    pub total_work_orders: i64,
    pub open_work_orders: i64,
    pub cost_total: f64,
    pub currency: String,
}
