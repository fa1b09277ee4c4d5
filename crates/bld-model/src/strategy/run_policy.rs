use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Defines how a new build is scheduled relative to sibling builds of the same config.
///
/// Strategies:
/// - `Parallel`: Builds run concurrently, no ordering between them.
/// - `Serial`: Builds run one at a time, in creation order.
/// - `SerialLatestOnly`: Builds run one at a time; queued builds are cancelled
///   when a newer one arrives, so only the latest waits for the running one.
///
/// The policy is carried by the build's run-policy label. Its textual form is
/// part of the wire contract and is matched case-sensitively.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunPolicy {
    /// Sibling builds may overlap.
    Parallel,
    /// Sibling builds run strictly one after another.
    #[default]
    Serial,
    /// Like `Serial`, but only the newest queued build is kept.
    SerialLatestOnly,
}

impl RunPolicy {
    /// Returns the label value for this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPolicy::Parallel => "Parallel",
            RunPolicy::Serial => "Serial",
            RunPolicy::SerialLatestOnly => "SerialLatestOnly",
        }
    }
}

impl FromStr for RunPolicy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "Parallel" => Ok(RunPolicy::Parallel),
            "Serial" => Ok(RunPolicy::Serial),
            "SerialLatestOnly" => Ok(RunPolicy::SerialLatestOnly),
            other => Err(ModelError::UnknownRunPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for RunPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
