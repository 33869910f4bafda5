//! Data models for GearGuard

pub mod dashboard;
pub mod enums;
pub mod equipment;
pub mod maintenance_request;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use dashboard::DashboardStats;
pub use enums::{EquipmentStatus, Priority, RequestStatus, RequestType};
pub use equipment::{Equipment, EquipmentDetail};
pub use maintenance_request::MaintenanceRequest;
pub use team::Team;
pub use user::{TechnicianSummary, User};
