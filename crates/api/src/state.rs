use std::sync::Arc;

use adbook_core::clock::Clock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: adbook_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source of "today" for booking date validation. Production wires in
    /// `SystemClock`; tests pin a fixed date.
    pub clock: Arc<dyn Clock>,
}
