use serde::Deserialize;

/// One workflow run as reported by the CI platform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowRun {
    pub status: String,
    /// `None` while the run has not finished
    pub conclusion: Option<String>,
}

impl WorkflowRun {
    pub fn conclusion_label(&self) -> &str {
        self.conclusion.as_deref().unwrap_or("None")
    }
}

/// CI state as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CiSnapshot {
    Available(WorkflowRun),
    /// The CI platform could not be read; the dashboard still renders.
    Degraded,
}

impl CiSnapshot {
    pub const UNKNOWN: &'static str = "unknown";

    pub fn status(&self) -> &str {
        match self {
            CiSnapshot::Available(run) => &run.status,
            CiSnapshot::Degraded => Self::UNKNOWN,
        }
    }

    pub fn conclusion(&self) -> &str {
        match self {
            CiSnapshot::Available(run) => run.conclusion_label(),
            CiSnapshot::Degraded => Self::UNKNOWN,
        }
    }
}

/// Result of asking the CI platform to start a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Started,
    /// Any status other than 204
    Rejected(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_reports_unknown() {
        assert_eq!(CiSnapshot::Degraded.status(), "unknown");
        assert_eq!(CiSnapshot::Degraded.conclusion(), "unknown");
    }

    #[test]
    fn test_pending_run_has_no_conclusion() {
        let run: WorkflowRun =
            serde_json::from_str(r#"{"status": "in_progress", "conclusion": null, "id": 9}"#).unwrap();
        let snap = CiSnapshot::Available(run);
        assert_eq!(snap.status(), "in_progress");
        assert_eq!(snap.conclusion(), "None");
    }
}
