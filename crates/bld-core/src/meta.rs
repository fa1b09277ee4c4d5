use bld_model::{ANNOTATION_BUILD_CONFIG_PAUSED, ANNOTATION_BUILD_POD_NAME, BuildConfig, Pod};

/// Name of the build executed by `pod`, or `""` when unknown.
pub fn build_identifier(pod: Option<&Pod>) -> &str {
    pod.map(|p| p.metadata.annotations.get_or_empty(ANNOTATION_BUILD_POD_NAME))
        .unwrap_or_default()
}

/// Returns `true` if the config is paused and must not start new builds.
///
/// The pause annotation is compared case-insensitively against `"true"`.
pub fn is_paused(config: &BuildConfig) -> bool {
    config
        .metadata
        .annotations
        .get(ANNOTATION_BUILD_CONFIG_PAUSED)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(paused: Option<&str>) -> BuildConfig {
        let mut cfg = BuildConfig::default();
        if let Some(v) = paused {
            cfg.metadata.annotations.insert(ANNOTATION_BUILD_CONFIG_PAUSED, v);
        }
        cfg
    }

    #[test]
    fn paused_accepts_any_case_of_true() {
        for v in ["true", "True", "TRUE", "tRuE"] {
            assert!(is_paused(&config(Some(v))), "{v:?} must pause");
        }
    }

    #[test]
    fn other_values_are_not_paused() {
        for v in ["false", "", "yes", "1", " true"] {
            assert!(!is_paused(&config(Some(v))), "{v:?} must not pause");
        }
        assert!(!is_paused(&config(None)));
    }

    #[test]
    fn build_identifier_reads_pod_annotation() {
        let mut pod = Pod::default();
        assert_eq!(build_identifier(Some(&pod)), "");

        pod.metadata
            .annotations
            .insert(ANNOTATION_BUILD_POD_NAME, "app-3");
        assert_eq!(build_identifier(Some(&pod)), "app-3");
        assert_eq!(build_identifier(None), "");
    }
}
