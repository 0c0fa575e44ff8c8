//! GitHub Actions client

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::application::errors::CiError;
use crate::domain::entities::{DispatchOutcome, WorkflowRun};
use crate::domain::traits::CiProvider;
use crate::infrastructure::config::CiConfig;

const ACCEPT: &str = "application/vnd.github.v3+json";

/// Client for one repository's workflow runs.
///
/// Every request is bounded by the configured timeout and aborted as soon
/// as `cancel` fires.
pub struct GithubClient {
    client: Client,
    api_base: String,
    owner: String,
    repo: String,
    workflow: String,
    git_ref: String,
    token: String,
    cancel: CancellationToken,
}

#[derive(Deserialize)]
struct RunsResponse {
    workflow_runs: Vec<WorkflowRun>,
}

#[derive(Serialize)]
struct DispatchRequest<'a> {
    #[serde(rename = "ref")]
    git_ref: &'a str,
}

impl GithubClient {
    pub fn new(config: &CiConfig, cancel: CancellationToken) -> Result<Self, CiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("vps-dashboard-bot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            workflow: config.workflow.clone(),
            git_ref: config.git_ref.clone(),
            token: config.token.clone().unwrap_or_default(),
            cancel,
        })
    }

    fn runs_url(&self) -> String {
        format!("{}/repos/{}/{}/actions/runs", self.api_base, self.owner, self.repo)
    }

    fn dispatch_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/actions/workflows/{}/dispatches",
            self.api_base, self.owner, self.repo, self.workflow
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", ACCEPT)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, CiError> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(CiError::Cancelled),
            result = self.authorized(request).send() => result.map_err(CiError::from),
        }
    }
}

#[async_trait]
impl CiProvider for GithubClient {
    async fn latest_run(&self) -> Result<WorkflowRun, CiError> {
        let response = self.send(self.client.get(self.runs_url())).await?;

        if !response.status().is_success() {
            return Err(CiError::Status(response.status().as_u16()));
        }

        let body = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(CiError::Cancelled),
            body = response.bytes() => body?,
        };
        let data: RunsResponse =
            serde_json::from_slice(&body).map_err(|e| CiError::Decode(e.to_string()))?;

        let run = data.workflow_runs.into_iter().next().ok_or(CiError::NoRuns)?;
        tracing::debug!("Latest run: {} / {}", run.status, run.conclusion_label());
        Ok(run)
    }

    async fn dispatch_workflow(&self) -> Result<DispatchOutcome, CiError> {
        let request = self
            .client
            .post(self.dispatch_url())
            .json(&DispatchRequest { git_ref: &self.git_ref });
        let response = self.send(request).await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            tracing::info!("Dispatched workflow {} on {}", self.workflow, self.git_ref);
            Ok(DispatchOutcome::Started)
        } else {
            tracing::warn!("Workflow dispatch rejected with status {}", status);
            Ok(DispatchOutcome::Rejected(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GithubClient {
        let config = CiConfig {
            api_base: "https://api.example.test/".to_string(),
            ..CiConfig::default()
        };
        GithubClient::new(&config, CancellationToken::new()).unwrap()
    }

    #[test]
    fn test_urls() {
        let client = client();
        assert_eq!(
            client.runs_url(),
            "https://api.example.test/repos/bykoviaz454-png/VPS/actions/runs"
        );
        assert_eq!(
            client.dispatch_url(),
            "https://api.example.test/repos/bykoviaz454-png/VPS/actions/workflows/bot.yml/dispatches"
        );
    }

    #[test]
    fn test_dispatch_body() {
        let body = serde_json::to_value(DispatchRequest { git_ref: "main" }).unwrap();
        assert_eq!(body, serde_json::json!({"ref": "main"}));
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let cancel = CancellationToken::new();
        let config = CiConfig {
            api_base: "http://10.255.255.1".to_string(),
            ..CiConfig::default()
        };
        let client = GithubClient::new(&config, cancel.clone()).unwrap();
        cancel.cancel();

        assert!(matches!(client.latest_run().await, Err(CiError::Cancelled)));
        assert!(matches!(client.dispatch_workflow().await, Err(CiError::Cancelled)));
    }
}
