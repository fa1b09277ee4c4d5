mod domain;
pub use domain::{
    ANNOTATION_BUILD_CONFIG, ANNOTATION_BUILD_CONFIG_PAUSED, ANNOTATION_BUILD_NUMBER,
    ANNOTATION_BUILD_POD_NAME, LABEL_BUILD_CONFIG, LABEL_BUILD_CONFIG_DEPRECATED,
    LABEL_BUILD_RUN_POLICY, MAX_LABEL_VALUE_LEN, NO_BUILD_LOGS_MESSAGE, label_value,
};
pub use domain::{Annotations, Env, EnvVar, Labels, ListMeta, ObjectMeta, ObjectReference};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::{Build, BuildConfig, BuildList, BuildSpec, BuildStatus, Object, Pod};

mod status;
pub use status::BuildPhase;

mod strategy;
pub use strategy::{BuildStrategy, CustomStrategy, DockerStrategy, RunPolicy, SourceStrategy};
