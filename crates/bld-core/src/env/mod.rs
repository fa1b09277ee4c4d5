//! Trusted environment reconciliation for privileged build containers.
mod whitelist;
pub use whitelist::{DEFAULT_WHITELIST, Whitelist};

mod merge;
pub use merge::{merge_trusted_env, merge_trusted_env_global};
