use serde::{Deserialize, Serialize};

use crate::{BuildPhase, BuildStrategy, ObjectMeta};

/// Desired state of a build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSpec {
    /// Execution strategy. `None` when the orchestration layer has not filled it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<BuildStrategy>,
}

/// Observed state of a build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStatus {
    #[serde(default)]
    pub phase: BuildPhase,
}

/// One execution attempt of a build config.
///
/// Created by the orchestration layer when a build is triggered; the phase
/// is advanced externally while the build runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: BuildSpec,
    #[serde(default)]
    pub status: BuildStatus,
}

impl Build {
    /// Create a build in phase `New` with empty metadata maps and no strategy.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta::new(namespace, name),
            ..Default::default()
        }
    }

    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn phase(&self) -> &BuildPhase {
        &self.status.phase
    }

    /// Builder-style helper setting the phase.
    pub fn with_phase(mut self, phase: BuildPhase) -> Self {
        self.status.phase = phase;
        self
    }

    /// Builder-style helper adding a label.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.labels.insert(key, value);
        self
    }

    /// Builder-style helper adding an annotation.
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.annotations.insert(key, value);
        self
    }

    /// Builder-style helper setting the strategy.
    pub fn with_strategy(mut self, strategy: BuildStrategy) -> Self {
        self.spec.strategy = Some(strategy);
        self
    }
}
