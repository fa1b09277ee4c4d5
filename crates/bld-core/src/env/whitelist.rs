use std::{collections::BTreeSet, sync::OnceLock};

use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Variable names allowed to reach the privileged build container by default.
pub const DEFAULT_WHITELIST: &[&str] = &["BUILD_LOGLEVEL", "GIT_SSL_NO_VERIFY"];

static GLOBAL: OnceLock<Whitelist> = OnceLock::new();

/// Immutable set of environment variable names permitted to cross from
/// user-supplied configuration into a privileged build container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist(BTreeSet<String>);

impl Whitelist {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Process-wide whitelist.
    ///
    /// Returns the whitelist set by [`Whitelist::install`], or the default one
    /// if nothing was installed. The first call fixes the value for the rest of
    /// the process.
    pub fn global() -> &'static Whitelist {
        GLOBAL.get_or_init(Whitelist::default)
    }

    /// Install the process-wide whitelist.
    ///
    /// Must run at startup, before the first [`Whitelist::global`] call.
    /// Fails with [`CoreError::WhitelistAlreadyInstalled`] once a value is fixed.
    pub fn install(whitelist: Whitelist) -> CoreResult<()> {
        let names = whitelist.len();
        GLOBAL
            .set(whitelist)
            .map_err(|_| CoreError::WhitelistAlreadyInstalled)?;
        debug!(names, "environment whitelist installed");
        Ok(())
    }
}

impl Default for Whitelist {
    fn default() -> Self {
        Self::new(DEFAULT_WHITELIST.iter().copied())
    }
}
