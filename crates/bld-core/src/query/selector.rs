use std::{collections::BTreeMap, fmt};

use bld_model::{LABEL_BUILD_CONFIG, LABEL_BUILD_CONFIG_DEPRECATED, Labels, label_value};

/// Exact-match predicate over labels.
///
/// An object matches when every requirement key is present with exactly the
/// required value. An empty selector matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSelector {
    requirements: BTreeMap<String, String>,
}

impl LabelSelector {
    /// Create a selector that matches everything.
    pub fn everything() -> Self {
        Self::default()
    }

    /// Builder-style helper adding a `key=value` requirement.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.requirements.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if `labels` satisfy every requirement.
    pub fn matches(&self, labels: &Labels) -> bool {
        self.requirements
            .iter()
            .all(|(k, v)| labels.get(k) == Some(v.as_str()))
    }

    /// Iterate through requirements as `(&str, &str)` pairs, sorted by key.
    pub fn requirements(&self) -> impl Iterator<Item = (&str, &str)> {
        self.requirements
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

/// Renders the selector in `key=value,key2=value2` form.
impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.requirements().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}

/// Selector matching every build of the config named `name`.
///
/// The name is shortened with [`label_value`], as it is when the label is written.
pub fn selector_for_config(name: &str) -> LabelSelector {
    LabelSelector::everything().with(LABEL_BUILD_CONFIG, label_value(name))
}

/// Selector matching builds of the config named `name` through the legacy label.
pub fn deprecated_selector_for_config(name: &str) -> LabelSelector {
    LabelSelector::everything().with(LABEL_BUILD_CONFIG_DEPRECATED, name)
}
