//! Reply formatter - operator-facing text for every command

use std::time::Duration;

use crate::application::services::DashboardReport;
use crate::domain::entities::telemetry::gib;
use crate::domain::entities::{CpuSnapshot, DiskSnapshot, DispatchOutcome, MemorySnapshot, OsIdentity, WorkflowRun};
use crate::infrastructure::storage::LogTail;

pub const WELCOME: &str = "🤖 Public VPS Dashboard Bot\n\n\
    Use /dashboard to see server panel\n\
    Use /help for commands";

pub const HELP: &str = "🛠 COMMANDS\n\n\
    /dashboard\n/ping\n/uptime\n/logs\n\n\
    /cpu /ram /disk\n/os /python\n\n\
    /status /run /lastbuild\n\n\
    /restart /stop";

pub const PONG: &str = "🏓 Pong! Bot is alive";

pub const RESTARTING: &str = "🔄 Restarting bot...";

pub const STOPPING: &str = "🛑 Bot stopped (cron will restart)";

pub const NO_LOGS: &str = "📭 No logs yet";

pub fn uptime(elapsed: Duration) -> String {
    format!("⏱ Uptime: {} sec", elapsed.as_secs())
}

pub fn cpu(cpu: &CpuSnapshot) -> String {
    format!("🧠 CPU Usage: {:.1}%\nCores: {}", cpu.usage_percent, cpu.logical_cores)
}

pub fn memory(mem: &MemorySnapshot) -> String {
    format!(
        "💾 RAM\nTotal: {:.2} GB\nUsed: {:.2} GB\nFree: {:.2} GB\nUsage: {:.1}%",
        gib(mem.total_bytes),
        gib(mem.used_bytes),
        gib(mem.available_bytes),
        mem.percent
    )
}

pub fn disk(disk: &DiskSnapshot) -> String {
    format!(
        "📀 Disk\nTotal: {:.2} GB\nUsed: {:.2} GB\nFree: {:.2} GB\nUsage: {:.1}%",
        gib(disk.total_bytes),
        gib(disk.used_bytes),
        gib(disk.free_bytes),
        disk.percent
    )
}

pub fn os(os: &OsIdentity) -> String {
    format!("🖥 OS: {} {}", os.name, os.release)
}

pub fn runtime(version: &str) -> String {
    format!("🦀 Runtime: {}", version)
}

pub fn logs(tail: &LogTail) -> String {
    match tail {
        LogTail::Missing => NO_LOGS.to_string(),
        LogTail::Content(data) => format!("📜 Logs:\n\n{}", data),
    }
}

pub fn status(run: &WorkflowRun) -> String {
    format!("📊 Status: {}\nResult: {}", run.status, run.conclusion_label())
}

pub fn last_build(run: &WorkflowRun) -> String {
    format!("🧾 Last Build\n{} | {}", run.status, run.conclusion_label())
}

pub fn dispatch(outcome: DispatchOutcome) -> &'static str {
    match outcome {
        DispatchOutcome::Started => "▶️ Workflow started",
        DispatchOutcome::Rejected(_) => "❌ Failed",
    }
}

/// Markdown panel for `/dashboard`
pub fn dashboard(report: &DashboardReport) -> String {
    format!(
        "📊 *PUBLIC VPS DASHBOARD*\n\n\
         🟢 Bot: Online\n\
         ⏱ Uptime: {} sec\n\n\
         🧠 CPU: {:.1}%\n\
         💾 RAM: {:.1}%\n\
         📀 Disk: {:.1}%\n\n\
         ⚙️ System\n\
         • OS: {} {}\n\
         • Runtime: {}\n\n\
         🔄 GitHub Workflow\n\
         • Status: {}\n\
         • Result: {}",
        report.uptime_secs,
        report.cpu.usage_percent,
        report.memory.percent,
        report.disk.percent,
        report.os.name,
        report.os.release,
        report.runtime,
        report.ci.status(),
        report.ci.conclusion(),
    )
}
