// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dd_containerid::{ContainerId, Detector, config};
use log::{info, warn};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "container-id")]
#[command(about = "Prints the ID of the container this process is running in", long_about = None)]
struct Args {
    /// Path to the agent configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read cgroup membership from this file instead of procfs (can be repeated)
    #[arg(long = "cgroup-file", value_name = "PATH")]
    cgroup_files: Vec<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the abbreviated 12 character ID
    #[arg(long)]
    short: bool,

    /// Exit with an error when no container is detected
    #[arg(long)]
    require: bool,
}

#[derive(Serialize)]
struct Response<'a> {
    container_id: Option<&'a str>,
}

fn render(id: Option<&ContainerId>, args: &Args) -> Result<String> {
    let id = id.map(|id| if args.short { id.short() } else { id.as_str() });

    if args.json {
        return serde_json::to_string(&Response { container_id: id })
            .context("Failed to serialize response");
    }

    Ok(id.unwrap_or_default().to_string())
}

#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = config::load_config(args.config.clone());
    let log_level = config::get_log_level(&config);
    simple_logger::init_with_level(log_level)?;

    if let Err(e) = &config {
        warn!("Ignoring agent config: {e:#}");
    }
    let config = config.ok().flatten();

    let paths = if args.cgroup_files.is_empty() {
        config::get_cgroup_paths(&config)
    } else {
        args.cgroup_files.clone()
    };
    info!("Looking up container id in {:?}", paths);

    let id = Detector::from_paths(paths).detect();
    let output = render(id.as_ref(), &args)?;

    if !output.is_empty() {
        println!("{output}");
    }

    if id.is_none() && args.require {
        eprintln!("No container detected");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
