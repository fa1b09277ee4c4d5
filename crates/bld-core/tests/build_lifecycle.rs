use bld_core::prelude::*;
use bld_model::{
    ANNOTATION_BUILD_CONFIG, ANNOTATION_BUILD_NUMBER, Build, BuildPhase, BuildStrategy, Env,
    EnvVar, LABEL_BUILD_CONFIG, LABEL_BUILD_CONFIG_DEPRECATED, LABEL_BUILD_RUN_POLICY, ListMeta,
    ObjectReference, RunPolicy, SourceStrategy,
};

fn build_from_config(config: &str, version: i64, phase: BuildPhase) -> Build {
    Build::new("team-a", name_for_config_version(config, version))
        .with_annotation(ANNOTATION_BUILD_CONFIG, config)
        .with_annotation(ANNOTATION_BUILD_NUMBER, version.to_string())
        .with_label(LABEL_BUILD_CONFIG, config)
        .with_label(LABEL_BUILD_RUN_POLICY, "SerialLatestOnly")
        .with_phase(phase)
        .with_strategy(BuildStrategy::Source(SourceStrategy {
            from: ObjectReference::new("ImageStreamTag", "nodejs:18").in_namespace("openshift"),
        }))
}

fn history() -> InMemoryLister {
    InMemoryLister::new(vec![
        build_from_config("frontend", 1, BuildPhase::Complete),
        build_from_config("frontend", 2, BuildPhase::Failed),
        build_from_config("frontend", 3, BuildPhase::Running),
        build_from_config("backend", 1, BuildPhase::Pending),
        build_from_config("frontend", 4, BuildPhase::New),
    ])
    .with_metadata(ListMeta {
        resource_version: Some("88".into()),
        continue_token: None,
    })
}

#[test]
fn scheduler_view_of_a_config() {
    let lister = history();
    let active = |b: &Build| !is_build_complete(b);

    let Ok(running) = list_builds_for_config(&lister, "team-a", "frontend", Some(&active));
    let names: Vec<_> = running.items.iter().map(|b| b.name()).collect();
    assert_eq!(names, vec!["frontend-3", "frontend-4"]);
    assert_eq!(running.metadata.resource_version.as_deref(), Some("88"));

    for b in &running.items {
        assert_eq!(build_run_policy(b), RunPolicy::SerialLatestOnly);
        assert_eq!(resolve_config_name(Some(b)), "frontend");
    }

    let Ok(all) = list_builds_for_config(&lister, "team-a", "frontend", None);
    let next = all
        .items
        .iter()
        .map(|b| resolve_version(Some(b)))
        .max()
        .unwrap_or(0)
        + 1;
    assert_eq!(name_for_config_version("frontend", next), "frontend-5");
}

#[test]
fn legacy_builds_resolve_through_deprecated_label() {
    let legacy = Build::new("team-a", "old-7").with_label(LABEL_BUILD_CONFIG_DEPRECATED, "old");
    assert_eq!(resolve_config_name(Some(&legacy)), "old");
    assert_eq!(resolve_version(Some(&legacy)), 0);
    assert!(matches!(
        build_number(&legacy),
        Err(CoreError::MissingAnnotation { .. })
    ));

    let sel = deprecated_selector_for_config("old");
    assert!(sel.matches(&legacy.metadata.labels));
    assert!(!selector_for_config("old").matches(&legacy.metadata.labels));
}

#[test]
fn execution_path_prepares_privileged_container() {
    let mut build = build_from_config("frontend", 6, BuildPhase::Pending);

    let copy = copy_build(&JsonCopier, &build).unwrap();
    assert_eq!(copy, build);

    let strategy = build.spec.strategy.as_mut().unwrap();
    if let Some(image) = input_reference_mut(strategy) {
        image.name = "nodejs@sha256:abc".into();
    }
    assert_eq!(
        build_input_reference(&build).map(|r| r.name.as_str()),
        Some("nodejs@sha256:abc")
    );
    assert_ne!(build_input_reference(&copy), build_input_reference(&build));

    let user_env = vec![
        EnvVar::new("BUILD_LOGLEVEL", "5"),
        EnvVar::new("LD_PRELOAD", "/tmp/hook.so"),
        EnvVar::new("GIT_SSL_NO_VERIFY", "true"),
    ];
    let mut container_env = Env::from(vec![
        EnvVar::new("BUILD", "{}"),
        EnvVar::new("BUILD_LOGLEVEL", "0"),
    ]);
    let whitelist = Whitelist::default();

    merge_trusted_env(&user_env, &mut container_env, false, &whitelist);

    assert_eq!(
        container_env.as_slice(),
        &[
            EnvVar::new("BUILD", "{}"),
            EnvVar::new("BUILD_LOGLEVEL", "0"),
            EnvVar::new("GIT_SSL_NO_VERIFY", "true"),
        ]
    );
    assert!(container_env.get("LD_PRELOAD").is_none());
}
