pub mod adapters;
pub mod config;
pub mod domain;
pub mod infra;
pub mod server;
pub mod services;

use {services::audit_recorder::AuditRecorder, std::sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub recorder: AuditRecorder,
    pub greeting: Arc<str>,
}
