//! Structural copies of model objects through an injected copier.
use std::convert::Infallible;

use bld_model::{Build, Object};
use thiserror::Error;

/// Produces independent deep copies of model objects.
///
/// Implementations may go through a serialized representation and are not
/// required to return the same kind they were given.
pub trait ObjectCopier {
    type Error: std::error::Error + Send + Sync + 'static;

    fn deep_copy(&self, obj: &Object) -> Result<Object, Self::Error>;
}

/// Copier backed by [`Clone`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneCopier;

impl ObjectCopier for CloneCopier {
    type Error = Infallible;

    fn deep_copy(&self, obj: &Object) -> Result<Object, Self::Error> {
        Ok(obj.clone())
    }
}

/// Copier that round-trips objects through their JSON wire form.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCopier;

impl ObjectCopier for JsonCopier {
    type Error = serde_json::Error;

    fn deep_copy(&self, obj: &Object) -> Result<Object, Self::Error> {
        let value = serde_json::to_value(obj)?;
        serde_json::from_value(value)
    }
}

#[derive(Debug, Error)]
pub enum CopyError<E>
where
    E: std::error::Error + 'static,
{
    /// Error returned by the copier itself.
    #[error(transparent)]
    Upstream(E),

    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Deep-copy `build` with `copier`.
///
/// Copier errors are passed through as [`CopyError::Upstream`]; a copier that
/// returns anything other than a build yields [`CopyError::TypeMismatch`].
pub fn copy_build<C>(copier: &C, build: &Build) -> Result<Build, CopyError<C::Error>>
where
    C: ObjectCopier + ?Sized,
{
    let copied = copier
        .deep_copy(&Object::Build(build.clone()))
        .map_err(CopyError::Upstream)?;
    match copied {
        Object::Build(b) => Ok(b),
        other => Err(CopyError::TypeMismatch {
            expected: "Build",
            actual: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bld_model::{
        ANNOTATION_BUILD_NUMBER, BuildPhase, BuildStrategy, ObjectReference, Pod, SourceStrategy,
    };

    fn sample() -> Build {
        Build::new("ns", "app-5")
            .with_phase(BuildPhase::Other("Suspended".into()))
            .with_annotation(ANNOTATION_BUILD_NUMBER, "5")
            .with_strategy(BuildStrategy::Source(SourceStrategy {
                from: ObjectReference::new("ImageStreamTag", "ruby:3").in_namespace("openshift"),
            }))
    }

    #[test]
    fn clone_copier_returns_equal_independent_copy() {
        let original = sample();
        let mut copy = copy_build(&CloneCopier, &original).unwrap();
        assert_eq!(copy, original);

        copy.metadata.annotations.insert(ANNOTATION_BUILD_NUMBER, "6");
        assert_eq!(
            original.metadata.annotations.get(ANNOTATION_BUILD_NUMBER),
            Some("5")
        );
    }

    #[test]
    fn json_copier_preserves_every_field() {
        let original = sample();
        let copy = copy_build(&JsonCopier, &original).unwrap();
        assert_eq!(copy, original);
    }

    #[test]
    fn wrong_kind_is_a_type_mismatch() {
        struct PodCopier;
        impl ObjectCopier for PodCopier {
            type Error = Infallible;
            fn deep_copy(&self, _obj: &Object) -> Result<Object, Infallible> {
                Ok(Object::Pod(Pod::default()))
            }
        }

        let err = copy_build(&PodCopier, &sample()).unwrap_err();
        assert!(matches!(
            err,
            CopyError::TypeMismatch {
                expected: "Build",
                actual: "Pod"
            }
        ));
        assert_eq!(err.to_string(), "expected Build, got Pod");
    }

    #[test]
    fn copier_error_is_passed_through() {
        #[derive(Debug, Error)]
        #[error("scheme has no conversion for {0}")]
        struct NoConversion(&'static str);

        struct Broken;
        impl ObjectCopier for Broken {
            type Error = NoConversion;
            fn deep_copy(&self, obj: &Object) -> Result<Object, NoConversion> {
                Err(NoConversion(obj.kind()))
            }
        }

        let err = copy_build(&Broken, &sample()).unwrap_err();
        assert_eq!(err.to_string(), "scheme has no conversion for Build");
        assert!(matches!(err, CopyError::Upstream(NoConversion("Build"))));
    }
}
