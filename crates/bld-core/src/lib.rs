pub mod copy;
pub mod env;
pub mod error;
pub mod input;
pub mod meta;
pub mod naming;
pub mod phase;
pub mod policy;
pub mod query;

pub mod prelude {
    pub use crate::copy::{CloneCopier, CopyError, JsonCopier, ObjectCopier, copy_build};
    pub use crate::env::{Whitelist, merge_trusted_env, merge_trusted_env_global};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::input::{build_input_reference, input_reference, input_reference_mut};
    pub use crate::meta::{build_identifier, is_paused};
    pub use crate::naming::{
        build_number, name_for_config_version, resolve_config_name, resolve_version,
    };
    pub use crate::phase::{is_build_complete, is_complete};
    pub use crate::policy::{build_run_policy, resolve_run_policy};
    pub use crate::query::{
        BuildLister, InMemoryLister, LabelSelector, deprecated_selector_for_config,
        list_builds_for_config, selector_for_config,
    };
}
