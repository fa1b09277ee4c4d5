use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Object labels based on [`BTreeMap`].
///
/// Labels are short, selectable values; see [`crate::label_value`] for the length limit.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(pub BTreeMap<String, String>);

impl Labels {
    /// Create an empty set of labels.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if no labels are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite a label.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Remove a label, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Returns `true` if the key is present, even with an empty value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate through all labels as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Labels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Labels;

    #[test]
    fn insert_chains_and_overwrites() {
        let mut labels = Labels::new();
        labels.insert("a", "1").insert("b", "2").insert("a", "3");

        assert_eq!(labels.get("a"), Some("3"));
        assert_eq!(labels.get("b"), Some("2"));
        assert_eq!(labels.iter().count(), 2);
    }

    #[test]
    fn empty_value_is_still_present() {
        let labels: Labels = [("buildconfig", "")].into_iter().collect();
        assert!(labels.contains_key("buildconfig"));
        assert_eq!(labels.get("buildconfig"), Some(""));
        assert!(!labels.contains_key("missing"));
    }

    #[test]
    fn remove_returns_value() {
        let mut labels: Labels = [("k", "v")].into_iter().collect();
        assert_eq!(labels.remove("k").as_deref(), Some("v"));
        assert!(labels.is_empty());
    }
}
