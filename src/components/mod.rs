//! UI Components
//!
//! Leptos components: shared widgets plus one module per portal domain.

mod admin;
mod audits;
mod calibration;
mod capas;
mod complaints;
mod connection_panel;
mod dashboard;
mod delete_confirm_button;
mod deployment_guide;
mod documents;
mod dof_tasks;
pub mod form;
mod notifications;
mod risk_compare;
mod risk_matrix;
mod risk_settings;
mod risks;
mod status_badge;

pub use admin::AdminModule;
pub use audits::AuditsModule;
pub use calibration::CalibrationModule;
pub use capas::CapasModule;
pub use complaints::ComplaintsModule;
pub use connection_panel::ConnectionPanel;
pub use dashboard::DashboardModule;
pub use delete_confirm_button::DeleteConfirmButton;
pub use deployment_guide::DeploymentGuideModule;
pub use documents::DocumentsModule;
pub use dof_tasks::DofModule;
pub use notifications::NotificationsModule;
pub use risks::RisksModule;
pub use status_badge::StatusBadge;
