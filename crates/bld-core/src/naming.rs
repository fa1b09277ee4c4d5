//! Build naming and versioning.
//!
//! A build created from a config is named `<config>-<version>` and records
//! its version in the build-number annotation. The owning config is found
//! through an annotation first, then the current label, then the legacy label.
use bld_model::{
    ANNOTATION_BUILD_CONFIG, ANNOTATION_BUILD_NUMBER, Build, LABEL_BUILD_CONFIG,
    LABEL_BUILD_CONFIG_DEPRECATED,
};

use crate::error::{CoreError, CoreResult};

/// Name of the `version`-th build of the config named `config_name`.
///
/// The config name is not validated.
pub fn name_for_config_version(config_name: &str, version: i64) -> String {
    format!("{config_name}-{version}")
}

/// Name of the build config that produced `build`.
///
/// Exactly one source is honored, in this order:
/// 1. the config annotation, if the key exists (even with an empty value);
/// 2. the current config label, if the key exists;
/// 3. the deprecated config label, or `""` when that is absent too.
///
/// `None` yields `""`.
pub fn resolve_config_name(build: Option<&Build>) -> String {
    let Some(build) = build else {
        return String::new();
    };
    let meta = &build.metadata;

    if let Some(name) = meta.annotations.get(ANNOTATION_BUILD_CONFIG) {
        return name.to_string();
    }
    if let Some(name) = meta.labels.get(LABEL_BUILD_CONFIG) {
        return name.to_string();
    }
    meta.labels
        .get(LABEL_BUILD_CONFIG_DEPRECATED)
        .unwrap_or_default()
        .to_string()
}

/// Version of `build` within its config.
///
/// A missing or unparsable build-number annotation yields `0`, as does `None`.
/// Use [`build_number`] when absence must be reported.
pub fn resolve_version(build: Option<&Build>) -> i64 {
    build
        .and_then(|b| b.metadata.annotations.get(ANNOTATION_BUILD_NUMBER))
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Build number recorded on `build`.
///
/// Fails with [`CoreError::MissingAnnotation`] when the annotation is absent
/// and with [`CoreError::InvalidBuildNumber`] when it is not a 64-bit integer.
pub fn build_number(build: &Build) -> CoreResult<i64> {
    let Some(value) = build.metadata.annotations.get(ANNOTATION_BUILD_NUMBER) else {
        return Err(CoreError::MissingAnnotation {
            namespace: build.namespace().to_string(),
            name: build.name().to_string(),
            annotation: ANNOTATION_BUILD_NUMBER,
        });
    };
    value
        .parse::<i64>()
        .map_err(|source| CoreError::InvalidBuildNumber {
            value: value.to_string(),
            source,
        })
}
