//! Well-known metadata keys shared with the orchestration platform.
//!
//! These strings are part of the wire contract: builds, build configs and pods
//! written by other components carry exactly these keys, so they must never change.

/// Annotation on a build pod naming the build it executes.
pub const ANNOTATION_BUILD_POD_NAME: &str = "openshift.io/build.name";

/// Annotation on a build naming the build config that produced it.
///
/// Takes precedence over both config labels when resolving the owning config.
pub const ANNOTATION_BUILD_CONFIG: &str = "openshift.io/build-config.name";

/// Label on a build naming the build config that produced it.
///
/// Label values are limited in length, see [`label_value`].
pub const LABEL_BUILD_CONFIG: &str = "openshift.io/build-config.name";

/// Legacy label naming the owning build config.
///
/// Still honored as the last resort when resolving the owning config.
pub const LABEL_BUILD_CONFIG_DEPRECATED: &str = "buildconfig";

/// Annotation carrying the ordinal number of a build within its config.
pub const ANNOTATION_BUILD_NUMBER: &str = "openshift.io/build.number";

/// Label selecting the run policy of a build (`Parallel`, `Serial`, `SerialLatestOnly`).
pub const LABEL_BUILD_RUN_POLICY: &str = "openshift.io/build.start-policy";

/// Annotation marking a build config as paused.
pub const ANNOTATION_BUILD_CONFIG_PAUSED: &str = "openshift.io/build-config.paused";

/// Maximum length of a label value (DNS-1123 label length).
pub const MAX_LABEL_VALUE_LEN: usize = 63;

/// Message reported when a build has no logs available.
pub const NO_BUILD_LOGS_MESSAGE: &str = "No logs are available.";

/// Shorten `name` so that it is usable as a label value.
///
/// Names longer than [`MAX_LABEL_VALUE_LEN`] bytes are cut at that length,
/// moving back to the previous character boundary for non-ASCII input.
pub fn label_value(name: &str) -> &str {
    if name.len() <= MAX_LABEL_VALUE_LEN {
        return name;
    }
    let mut end = MAX_LABEL_VALUE_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}
