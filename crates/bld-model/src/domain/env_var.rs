use serde::{Deserialize, Serialize};

/// Single environment variable passed to a build container.
///
/// Both fields are plain UTF-8 strings with no validation applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    /// Variable name.
    name: String,
    /// Variable value.
    #[serde(default)]
    value: String,
}

impl EnvVar {
    /// Create a new variable.
    pub fn new<K, V>(name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, keeping the name.
    pub fn set_value<V: Into<String>>(&mut self, value: V) {
        self.value = value.into();
    }
}

impl From<(String, String)> for EnvVar {
    fn from((name, value): (String, String)) -> Self {
        Self { name, value }
    }
}

impl From<(&str, &str)> for EnvVar {
    fn from((name, value): (&str, &str)) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
