use bld_model::{Build, BuildPhase};

/// Returns `true` once a build has left the active phases.
///
/// Only `New`, `Pending` and `Running` are active. Every other phase,
/// including ones this crate does not enumerate, is terminal.
pub fn is_complete(phase: &BuildPhase) -> bool {
    !matches!(
        phase,
        BuildPhase::New | BuildPhase::Pending | BuildPhase::Running
    )
}

/// [`is_complete`] applied to the build's current phase.
pub fn is_build_complete(build: &Build) -> bool {
    is_complete(build.phase())
}
