//! Request/response documents of the inspect command.
use serde::{Deserialize, Serialize};

use bld_core::{
    env::{Whitelist, merge_trusted_env},
    input::build_input_reference,
    naming::{build_number, name_for_config_version, resolve_config_name, resolve_version},
    phase::is_build_complete,
    policy::build_run_policy,
    query::{InMemoryLister, list_builds_for_config, selector_for_config},
};
use bld_model::{Build, BuildPhase, Env, EnvVar, ObjectReference, RunPolicy};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectRequest {
    pub namespace: String,
    /// Build config whose history should be reported.
    pub config: Option<String>,
    pub builds: Vec<Build>,
    pub env: Option<EnvRequest>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvRequest {
    pub source: Vec<EnvVar>,
    pub output: Env,
    pub source_precedence: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub name: String,
    pub phase: BuildPhase,
    pub complete: bool,
    pub run_policy: RunPolicy,
    pub config_name: String,
    pub version: i64,
    #[serde(flatten)]
    pub build_number: BuildNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<ObjectReference>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildNumber {
    BuildNumber(i64),
    BuildNumberError(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryReport {
    pub config: String,
    pub selector: String,
    pub builds: Vec<String>,
    pub active: Vec<String>,
    /// Absent when the highest build number leaves no room for a successor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    pub builds: Vec<BuildReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<HistoryReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Env>,
}

pub fn inspect(req: InspectRequest, whitelist: &Whitelist) -> InspectReport {
    let builds = req.builds.iter().map(build_report).collect();

    let history = req
        .config
        .as_deref()
        .map(|config| history_report(&req.namespace, config, &req.builds));

    let env = req.env.map(|EnvRequest { source, mut output, source_precedence }| {
        merge_trusted_env(&source, &mut output, source_precedence, whitelist);
        output
    });

    InspectReport {
        builds,
        history,
        env,
    }
}

fn build_report(build: &Build) -> BuildReport {
    BuildReport {
        name: build.name().to_string(),
        phase: build.phase().clone(),
        complete: is_build_complete(build),
        run_policy: build_run_policy(build),
        config_name: resolve_config_name(Some(build)),
        version: resolve_version(Some(build)),
        build_number: match build_number(build) {
            Ok(n) => BuildNumber::BuildNumber(n),
            Err(e) => BuildNumber::BuildNumberError(e.to_string()),
        },
        input: build_input_reference(build).cloned(),
    }
}

fn history_report(namespace: &str, config: &str, builds: &[Build]) -> HistoryReport {
    let lister = InMemoryLister::new(builds.to_vec());
    let active = |b: &Build| !is_build_complete(b);

    let Ok(all) = list_builds_for_config(&lister, namespace, config, None);
    let Ok(running) = list_builds_for_config(&lister, namespace, config, Some(&active));

    let next = all
        .items
        .iter()
        .map(|b| resolve_version(Some(b)))
        .max()
        .unwrap_or(0)
        .checked_add(1);

    HistoryReport {
        config: config.to_string(),
        selector: selector_for_config(config).to_string(),
        builds: all.items.iter().map(|b| b.name().to_string()).collect(),
        active: running.items.iter().map(|b| b.name().to_string()).collect(),
        next_name: next.map(|n| name_for_config_version(config, n)),
    }
}
