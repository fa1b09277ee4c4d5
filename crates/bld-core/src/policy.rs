use bld_model::{Build, LABEL_BUILD_RUN_POLICY, Labels, RunPolicy};
use tracing::debug;

/// Resolve the run policy carried by the run-policy label.
///
/// Missing or unrecognized values fall back to [`RunPolicy::Serial`];
/// the fallback is reported as a debug event, never as an error.
pub fn resolve_run_policy(labels: &Labels) -> RunPolicy {
    match lookup(labels) {
        Ok(policy) => policy,
        Err(value) => {
            debug!(
                label = LABEL_BUILD_RUN_POLICY,
                value = value.unwrap_or("<absent>"),
                "run policy label missing or unrecognized, using default (Serial)"
            );
            RunPolicy::default()
        }
    }
}

/// Resolve the run policy of a build from its labels.
///
/// Same as [`resolve_run_policy`], but the fallback event names the build.
pub fn build_run_policy(build: &Build) -> RunPolicy {
    match lookup(&build.metadata.labels) {
        Ok(policy) => policy,
        Err(value) => {
            debug!(
                namespace = build.namespace(),
                name = build.name(),
                value = value.unwrap_or("<absent>"),
                "build does not have a valid start policy label, using default (Serial)"
            );
            RunPolicy::default()
        }
    }
}

/// `Err` carries the raw label value when it is present but unrecognized.
fn lookup(labels: &Labels) -> Result<RunPolicy, Option<&str>> {
    let value = labels.get(LABEL_BUILD_RUN_POLICY).ok_or(None)?;
    value.parse().map_err(|_| Some(value))
}
