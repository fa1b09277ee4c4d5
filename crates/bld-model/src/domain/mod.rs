mod env_var;
pub use env_var::EnvVar;

mod env;
pub use env::Env;

mod labels;
pub use labels::Labels;

mod annotations;
pub use annotations::Annotations;

mod meta;
pub use meta::{ListMeta, ObjectMeta, ObjectReference};

mod constants;
pub use constants::{
    ANNOTATION_BUILD_CONFIG, ANNOTATION_BUILD_CONFIG_PAUSED, ANNOTATION_BUILD_NUMBER,
    ANNOTATION_BUILD_POD_NAME, LABEL_BUILD_CONFIG, LABEL_BUILD_CONFIG_DEPRECATED,
    LABEL_BUILD_RUN_POLICY, MAX_LABEL_VALUE_LEN, NO_BUILD_LOGS_MESSAGE, label_value,
};
