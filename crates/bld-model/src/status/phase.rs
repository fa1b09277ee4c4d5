use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a build.
///
/// The set of phases is open: values this layer does not know are kept
/// verbatim in [`BuildPhase::Other`] and survive a serde round-trip unchanged.
/// The phase is written by the orchestration layer; this crate only reads it.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildPhase {
    /// Created, not yet scheduled.
    #[default]
    New,
    /// Scheduled, waiting for its pod to start.
    Pending,
    /// Build pod is running.
    Running,
    /// Finished successfully.
    Complete,
    /// Finished with a build failure.
    Failed,
    /// Could not be executed because of an infrastructure error.
    Error,
    /// Stopped on request.
    Cancelled,
    /// Any phase not listed above.
    Other(String),
}

impl BuildPhase {
    /// Returns the phase as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            BuildPhase::New => "New",
            BuildPhase::Pending => "Pending",
            BuildPhase::Running => "Running",
            BuildPhase::Complete => "Complete",
            BuildPhase::Failed => "Failed",
            BuildPhase::Error => "Error",
            BuildPhase::Cancelled => "Cancelled",
            BuildPhase::Other(s) => s,
        }
    }
}

impl FromStr for BuildPhase {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "New" => BuildPhase::New,
            "Pending" => BuildPhase::Pending,
            "Running" => BuildPhase::Running,
            "Complete" => BuildPhase::Complete,
            "Failed" => BuildPhase::Failed,
            "Error" => BuildPhase::Error,
            "Cancelled" => BuildPhase::Cancelled,
            other => BuildPhase::Other(other.to_string()),
        })
    }
}

impl From<String> for BuildPhase {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(BuildPhase::Other(_)) => BuildPhase::Other(s),
            Ok(phase) => phase,
            Err(never) => match never {},
        }
    }
}

impl From<BuildPhase> for String {
    fn from(p: BuildPhase) -> Self {
        match p {
            BuildPhase::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
