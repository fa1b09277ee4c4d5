use std::convert::Infallible;

use bld_model::{Build, BuildList, ListMeta};

use super::LabelSelector;

/// Read access to stored builds.
///
/// Implemented by the storage layer. Calls are synchronous from the caller's
/// point of view; errors are handed back to callers unchanged.
pub trait BuildLister {
    /// Error produced by the backing store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// List builds in `namespace` whose labels match `selector`.
    fn list(&self, namespace: &str, selector: &LabelSelector) -> Result<BuildList, Self::Error>;
}

impl<L: BuildLister + ?Sized> BuildLister for &L {
    type Error = L::Error;

    fn list(&self, namespace: &str, selector: &LabelSelector) -> Result<BuildList, Self::Error> {
        (**self).list(namespace, selector)
    }
}

/// [`BuildLister`] over a fixed set of builds held in memory.
///
/// Returned lists preserve insertion order and carry the configured [`ListMeta`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLister {
    builds: Vec<Build>,
    metadata: ListMeta,
}

impl InMemoryLister {
    pub fn new(builds: Vec<Build>) -> Self {
        Self {
            builds,
            metadata: ListMeta::default(),
        }
    }

    /// Replace the list metadata attached to every result.
    pub fn with_metadata(mut self, metadata: ListMeta) -> Self {
        self.metadata = metadata;
        self
    }
}

impl BuildLister for InMemoryLister {
    type Error = Infallible;

    fn list(&self, namespace: &str, selector: &LabelSelector) -> Result<BuildList, Self::Error> {
        let items = self
            .builds
            .iter()
            .filter(|b| b.namespace() == namespace && selector.matches(&b.metadata.labels))
            .cloned()
            .collect();
        Ok(BuildList {
            metadata: self.metadata.clone(),
            items,
        })
    }
}
