use std::sync::Arc;

use trailguard_core::scoring::Scorer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// The active scoring strategy (mock today, a real model later).
    pub scorer: Arc<dyn Scorer>,
}
