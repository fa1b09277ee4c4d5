use serde::{Deserialize, Serialize};

use crate::ObjectReference;

/// Build from application source with a builder image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStrategy {
    /// Builder image.
    pub from: ObjectReference,
}

/// Build from a Dockerfile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerStrategy {
    /// Overrides the Dockerfile's base image. If `None`, the Dockerfile's own `FROM` is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ObjectReference>,
}

/// Build with a custom builder image that drives the whole build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomStrategy {
    /// Custom builder image.
    pub from: ObjectReference,
}

/// How a build is executed.
///
/// Exactly one strategy is active per build; the input image lives inside the active variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildStrategy {
    Source(SourceStrategy),
    Docker(DockerStrategy),
    Custom(CustomStrategy),
}

impl BuildStrategy {
    /// Returns the strategy type as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            BuildStrategy::Source(_) => "source",
            BuildStrategy::Docker(_) => "docker",
            BuildStrategy::Custom(_) => "custom",
        }
    }
}
