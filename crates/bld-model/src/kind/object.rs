use serde::{Deserialize, Serialize};

use crate::{Build, ListMeta, ObjectMeta};

/// Reusable template producing builds. Only its metadata is modeled here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    #[serde(default)]
    pub metadata: ObjectMeta,
}

/// Workload unit executing a build. Only its metadata is modeled here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    #[serde(default)]
    pub metadata: ObjectMeta,
}

/// Collection of builds returned by a lister.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildList {
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<Build>,
}

impl BuildList {
    /// Create an empty list carrying `metadata`.
    pub fn with_metadata(metadata: ListMeta) -> Self {
        Self {
            metadata,
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Any object of the model, tagged by `kind` on the wire.
///
/// This is the value handed to structural-copy collaborators, which may
/// return an object of a different kind than the one they were given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Object {
    Build(Build),
    BuildConfig(BuildConfig),
    Pod(Pod),
    BuildList(BuildList),
}

impl Object {
    /// Returns the kind tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Build(_) => "Build",
            Object::BuildConfig(_) => "BuildConfig",
            Object::Pod(_) => "Pod",
            Object::BuildList(_) => "BuildList",
        }
    }
}

impl From<Build> for Object {
    fn from(b: Build) -> Self {
        Object::Build(b)
    }
}

impl From<BuildConfig> for Object {
    fn from(c: BuildConfig) -> Self {
        Object::BuildConfig(c)
    }
}

impl From<Pod> for Object {
    fn from(p: Pod) -> Self {
        Object::Pod(p)
    }
}

impl From<BuildList> for Object {
    fn from(l: BuildList) -> Self {
        Object::BuildList(l)
    }
}
