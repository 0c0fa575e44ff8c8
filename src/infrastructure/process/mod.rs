//! Process lifecycle: what `/restart` and `/stop` do once their reply is out

use tokio_util::sync::CancellationToken;

use crate::domain::entities::Lifecycle;

/// Ends the running bot.
///
/// `Stop` cancels the shutdown token; the polling loop returns and `main`
/// exits 0 after the log writer is flushed. `Restart` leaves at once without
/// any of that, relying on the supervisor to start a new process.
#[derive(Debug, Clone)]
pub struct ProcessController {
    shutdown: CancellationToken,
}

impl ProcessController {
    pub fn new(shutdown: CancellationToken) -> Self {
        Self { shutdown }
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub fn is_stopping(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    pub fn apply(&self, action: Lifecycle) {
        match action {
            Lifecycle::Restart => self.restart_now(),
            Lifecycle::Stop => {
                tracing::info!("Stop requested, shutting down");
                self.shutdown.cancel();
            }
        }
    }

    /// Hard exit. Destructors, including the log flush guard, do not run.
    pub fn restart_now(&self) -> ! {
        tracing::warn!("Restart requested, exiting immediately");
        std::process::exit(0)
    }
}
