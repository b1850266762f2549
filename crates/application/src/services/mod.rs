//! Application services - Use case implementations

mod dashboard_service;

pub use dashboard_service::DashboardService;
