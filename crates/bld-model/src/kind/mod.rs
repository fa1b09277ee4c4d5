mod build;
pub use build::{Build, BuildSpec, BuildStatus};

mod object;
pub use object::{BuildConfig, BuildList, Object, Pod};
