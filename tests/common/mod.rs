//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Once};
use std::time::Duration;

use httpmock::MockServer;
use tokio_util::sync::CancellationToken;

use vps_dashboard_bot::application::errors::TelemetryError;
use vps_dashboard_bot::domain::entities::{CpuSnapshot, DiskSnapshot, MemorySnapshot, OsIdentity};
use vps_dashboard_bot::domain::traits::TelemetrySource;
use vps_dashboard_bot::infrastructure::config::{CiConfig, Config};
use vps_dashboard_bot::infrastructure::github::GithubClient;
use vps_dashboard_bot::AppContext;

pub const GIB: u64 = 1024 * 1024 * 1024;
pub const TOKEN: &str = "ghp_test";
pub const RUNS_PATH: &str = "/repos/bykoviaz454-png/VPS/actions/runs";
pub const DISPATCH_PATH: &str = "/repos/bykoviaz454-png/VPS/actions/workflows/bot.yml/dispatches";

static INIT: Once = Once::new();

pub fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Host with fixed readings and no sampling delay
pub struct FakeHost;

impl TelemetrySource for FakeHost {
    fn cpu(&self, _window: Duration) -> CpuSnapshot {
        CpuSnapshot { usage_percent: 12.5, logical_cores: 4 }
    }

    fn memory(&self) -> MemorySnapshot {
        MemorySnapshot::from_host(8 * GIB, 2 * GIB, 6 * GIB)
    }

    fn disk(&self) -> Result<DiskSnapshot, TelemetryError> {
        Ok(DiskSnapshot::from_host(100 * GIB, 60 * GIB, 40 * GIB))
    }

    fn os(&self) -> OsIdentity {
        OsIdentity { name: "Linux".to_string(), release: "6.8.0-test".to_string() }
    }

    fn runtime_version(&self) -> String {
        "rustc 1.80.0".to_string()
    }
}

pub fn ci_config(server: &MockServer) -> CiConfig {
    CiConfig {
        api_base: server.base_url(),
        token: Some(TOKEN.to_string()),
        timeout_secs: 2,
        ..CiConfig::default()
    }
}

pub fn client(server: &MockServer) -> GithubClient {
    GithubClient::new(&ci_config(server), CancellationToken::new()).expect("client builds")
}

pub fn context(server: &MockServer, log_path: &Path) -> Arc<AppContext> {
    let mut config = Config::default();
    config.ci = ci_config(server);
    config.log.path = log_path.to_path_buf();
    Arc::new(AppContext::new(&config, Arc::new(FakeHost), Arc::new(client(server))))
}

pub fn runs_body() -> serde_json::Value {
    serde_json::json!({
        "total_count": 2,
        "workflow_runs": [
            {"id": 2, "status": "completed", "conclusion": "success"},
            {"id": 1, "status": "completed", "conclusion": "failure"}
        ]
    })
}
