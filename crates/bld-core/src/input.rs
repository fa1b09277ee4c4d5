use bld_model::{Build, BuildStrategy, ObjectReference};

/// Image reference the build starts from.
///
/// Borrows the `from` field of the active strategy, so callers always see the
/// live value. A Docker strategy without an explicit base image yields `None`.
pub fn input_reference(strategy: &BuildStrategy) -> Option<&ObjectReference> {
    match strategy {
        BuildStrategy::Source(s) => Some(&s.from),
        BuildStrategy::Docker(s) => s.from.as_ref(),
        BuildStrategy::Custom(s) => Some(&s.from),
    }
}

/// Mutable counterpart of [`input_reference`], used to rewrite the image in place.
pub fn input_reference_mut(strategy: &mut BuildStrategy) -> Option<&mut ObjectReference> {
    match strategy {
        BuildStrategy::Source(s) => Some(&mut s.from),
        BuildStrategy::Docker(s) => s.from.as_mut(),
        BuildStrategy::Custom(s) => Some(&mut s.from),
    }
}

/// [`input_reference`] of the build's strategy; `None` when no strategy is set.
pub fn build_input_reference(build: &Build) -> Option<&ObjectReference> {
    build.spec.strategy.as_ref().and_then(input_reference)
}
