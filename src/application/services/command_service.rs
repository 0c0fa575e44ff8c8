use std::sync::Arc;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::application::messaging::formatter;
use crate::application::services::{DashboardService, CPU_SAMPLE_WINDOW};
use crate::domain::entities::{Command, Lifecycle, Reply};
use crate::infrastructure::storage::LOG_TAIL_CHARS;

/// Runs commands against the application context
pub struct CommandService {
    ctx: Arc<AppContext>,
    dashboard: DashboardService,
}

impl CommandService {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            dashboard: DashboardService::new(Arc::clone(&ctx)),
            ctx,
        }
    }

    /// One command, one reply.
    ///
    /// Errors from the host or from the CI platform are returned as-is; only
    /// the dashboard absorbs CI failures.
    pub async fn execute(&self, command: Command) -> Result<Reply, BotError> {
        let ctx = &self.ctx;
        let reply = match command {
            Command::Start => Reply::text(formatter::WELCOME),
            Command::Help => Reply::text(formatter::HELP),
            Command::Dashboard => {
                let report = self.dashboard.collect().await?;
                Reply::markdown(formatter::dashboard(&report))
            }
            Command::Ping => Reply::text(formatter::PONG),
            Command::Uptime => Reply::text(formatter::uptime(ctx.uptime())),
            Command::Cpu => {
                let cpu = ctx.read_host(|t| t.cpu(CPU_SAMPLE_WINDOW)).await?;
                Reply::text(formatter::cpu(&cpu))
            }
            Command::Ram => {
                let memory = ctx.read_host(|t| t.memory()).await?;
                Reply::text(formatter::memory(&memory))
            }
            Command::Disk => {
                let disk = ctx.read_host(|t| t.disk()).await??;
                Reply::text(formatter::disk(&disk))
            }
            Command::Os => {
                let os = ctx.read_host(|t| t.os()).await?;
                Reply::text(formatter::os(&os))
            }
            Command::Python => {
                let version = ctx.read_host(|t| t.runtime_version()).await?;
                Reply::text(formatter::runtime(&version))
            }
            Command::Logs => {
                let tail = ctx.logs().tail(LOG_TAIL_CHARS).await?;
                Reply::text(formatter::logs(&tail))
            }
            Command::Status => {
                let run = ctx.ci().latest_run().await?;
                Reply::text(formatter::status(&run))
            }
            Command::Run => {
                let outcome = ctx.ci().dispatch_workflow().await?;
                Reply::text(formatter::dispatch(outcome))
            }
            Command::LastBuild => {
                let run = ctx.ci().latest_run().await?;
                Reply::text(formatter::last_build(&run))
            }
            Command::Restart => Reply::text(formatter::RESTARTING).then(Lifecycle::Restart),
            Command::Stop => Reply::text(formatter::STOPPING).then(Lifecycle::Stop),
        };
        Ok(reply)
    }
}
