use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("build {namespace}/{name} does not have {annotation} annotation")]
    MissingAnnotation {
        namespace: String,
        name: String,
        annotation: &'static str,
    },

    #[error("invalid build number {value:?}: {source}")]
    InvalidBuildNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("environment whitelist already installed")]
    WhitelistAlreadyInstalled,
}

pub type CoreResult<T> = Result<T, CoreError>;
