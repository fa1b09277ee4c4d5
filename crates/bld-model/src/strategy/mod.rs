mod build;
pub use build::{BuildStrategy, CustomStrategy, DockerStrategy, SourceStrategy};

mod run_policy;
pub use run_policy::RunPolicy;
