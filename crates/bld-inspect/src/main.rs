use std::io::{self, Write};

use anyhow::Context;
use tracing::info;

use bld_core::env::Whitelist;
use bld_observe::init_logger;

mod config;
use config::Config;

mod report;
use report::{InspectRequest, inspect};

fn main() -> anyhow::Result<()> {
    // 1) config + logger
    let cfg = Config::load()?;
    init_logger(&cfg.logger).context("initialize logger")?;

    // 2) process-wide whitelist, fixed before any merge runs
    if let Some(names) = cfg.whitelist {
        Whitelist::install(Whitelist::new(names)).context("install environment whitelist")?;
    }
    let whitelist = Whitelist::global();
    info!(names = whitelist.len(), "environment whitelist ready");

    // 3) request -> report
    let req: InspectRequest =
        serde_json::from_reader(io::stdin().lock()).context("parse inspect request from stdin")?;
    info!(builds = req.builds.len(), namespace = %req.namespace, "inspecting builds");
    let report = inspect(req, whitelist);

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report).context("write report")?;
    writeln!(out)?;
    Ok(())
}
