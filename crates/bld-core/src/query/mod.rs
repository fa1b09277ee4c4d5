//! Build history queries for a build config.
//!
//! Builds are found by the config label through an injected [`BuildLister`],
//! then optionally narrowed with a caller-supplied predicate.
mod lister;
pub use lister::{BuildLister, InMemoryLister};

mod selector;
pub use selector::{LabelSelector, deprecated_selector_for_config, selector_for_config};

use bld_model::{Build, BuildList};
use tracing::{instrument, trace};

/// List builds of the config `name` in `namespace`.
///
/// Lister errors are returned unchanged. Without a filter the lister's list is
/// returned as is. With a filter a new list is built that keeps the original
/// list metadata and only the builds accepted by `filter`, in their original
/// order; `filter` is called exactly once per build.
#[instrument(level = "debug", skip(lister, filter), fields(filtered = filter.is_some()))]
pub fn list_builds_for_config<L>(
    lister: &L,
    namespace: &str,
    name: &str,
    filter: Option<&dyn Fn(&Build) -> bool>,
) -> Result<BuildList, L::Error>
where
    L: BuildLister + ?Sized,
{
    let selector = selector_for_config(name);
    let result = lister.list(namespace, &selector)?;
    trace!(%selector, listed = result.len(), "lister returned builds");

    let Some(filter) = filter else {
        return Ok(result);
    };

    let BuildList { metadata, items } = result;
    let mut filtered = BuildList::with_metadata(metadata);
    filtered.items = items.into_iter().filter(|b| filter(b)).collect();

    trace!(kept = filtered.len(), "filter applied");
    Ok(filtered)
}
