use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use factoryos_core::registry::ThemeRegistry;
use factoryos_events::EventBus;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The registry
/// itself is synchronous and single-process; the `RwLock` here is the
/// adapter's synchronization layer, not a core guarantee.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory theme registry, seeded at startup.
    pub registry: Arc<RwLock<ThemeRegistry>>,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Centralized event bus for publishing platform events.
    pub event_bus: Arc<EventBus>,
}

impl AppState {
    /// Acquire the registry for reading.
    pub fn read_registry(&self) -> Result<RwLockReadGuard<'_, ThemeRegistry>, AppError> {
        self.registry
            .read()
            .map_err(|_| AppError::InternalError("theme registry lock poisoned".into()))
    }

    /// Acquire the registry for writing.
    pub fn write_registry(&self) -> Result<RwLockWriteGuard<'_, ThemeRegistry>, AppError> {
        self.registry
            .write()
            .map_err(|_| AppError::InternalError("theme registry lock poisoned".into()))
    }
}
