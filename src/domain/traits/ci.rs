use async_trait::async_trait;
use crate::application::errors::CiError;
use crate::domain::entities::{DispatchOutcome, WorkflowRun};

/// Client for the CI platform hosting the workflow
#[async_trait]
pub trait CiProvider: Send + Sync {
    /// Most recent workflow run of the repository
    async fn latest_run(&self) -> Result<WorkflowRun, CiError>;

    /// Ask the platform to start a new run of the configured workflow
    async fn dispatch_workflow(&self) -> Result<DispatchOutcome, CiError>;
}
