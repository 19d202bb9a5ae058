// src/state.rs
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::services::gateway::ModelGateway;
use crate::services::manual::Manual;
use crate::services::session_manager::SessionManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub sessions: SessionManager,
    pub gateway: Arc<dyn ModelGateway>,
    pub manual: Manual,
}

impl AppState {
    pub fn new(
        session_ttl: Duration,
        gateway: Arc<dyn ModelGateway>,
        manual_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sessions: SessionManager::new(session_ttl),
            gateway,
            manual: Manual::new(manual_path),
        }
    }
}
