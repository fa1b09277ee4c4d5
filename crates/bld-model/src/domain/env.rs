use serde::{Deserialize, Serialize};

use crate::EnvVar;

/// Ordered list of environment variables.
///
/// Names may repeat; serialized as a transparent array wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Env(pub Vec<EnvVar>);

impl Env {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all variables in order.
    pub fn iter(&self) -> impl Iterator<Item = &EnvVar> {
        self.0.iter()
    }

    /// Iterate mutably over all variables in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut EnvVar> {
        self.0.iter_mut()
    }

    /// Get the value for a name, returning the last matching entry.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|var| var.name() == name)
            .map(|var| var.value())
    }

    /// Append a variable to the end.
    pub fn push<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.push(EnvVar::new(name, value));
    }

    /// View the variables as a slice.
    pub fn as_slice(&self) -> &[EnvVar] {
        &self.0
    }
}

impl From<Vec<EnvVar>> for Env {
    fn from(vars: Vec<EnvVar>) -> Self {
        Self(vars)
    }
}

impl Extend<EnvVar> for Env {
    fn extend<T: IntoIterator<Item = EnvVar>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<EnvVar> for Env {
    fn from_iter<T: IntoIterator<Item = EnvVar>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
