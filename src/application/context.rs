//! Application context - everything a handler may read, built once at startup

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::errors::BotError;
use crate::domain::traits::{CiProvider, TelemetrySource};
use crate::infrastructure::config::Config;
use crate::infrastructure::storage::LogStore;

/// Immutable state shared by all command handlers
pub struct AppContext {
    started_at: Instant,
    telemetry: Arc<dyn TelemetrySource>,
    ci: Arc<dyn CiProvider>,
    logs: LogStore,
}

impl AppContext {
    pub fn new(config: &Config, telemetry: Arc<dyn TelemetrySource>, ci: Arc<dyn CiProvider>) -> Self {
        Self {
            started_at: Instant::now(),
            telemetry,
            ci,
            logs: LogStore::new(config.log.path.clone()),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn ci(&self) -> &dyn CiProvider {
        self.ci.as_ref()
    }

    pub fn logs(&self) -> &LogStore {
        &self.logs
    }

    /// Run a host reading on the blocking pool
    pub async fn read_host<T, F>(&self, read: F) -> Result<T, BotError>
    where
        F: FnOnce(&dyn TelemetrySource) -> T + Send + 'static,
        T: Send + 'static,
    {
        let telemetry = Arc::clone(&self.telemetry);
        tokio::task::spawn_blocking(move || read(telemetry.as_ref()))
            .await
            .map_err(|e| BotError::Internal(format!("telemetry task failed: {}", e)))
    }
}
