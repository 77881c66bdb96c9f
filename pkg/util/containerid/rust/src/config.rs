// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

use anyhow::{Context, Result};
use log::warn;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use yaml_rust2::{Yaml, YamlLoader};

use crate::procfs;

const DEFAULT_CONFIG_PATH: &str = "/etc/datadog-agent/datadog.yaml";

/// Loads the YAML config file if it exists
pub fn load_config(config_path: Option<PathBuf>) -> Result<Option<Yaml>> {
    let path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    // Env vars and procfs defaults are enough to run without a file
    if path.exists() {
        let mut file = File::open(&path).context("Failed to open agent config file")?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .context("Failed to read agent config file")?;

        let docs = YamlLoader::load_from_str(&contents).context("Failed to parse YAML config")?;
        Ok(docs.into_iter().next())
    } else {
        warn!(
            "Config file not found at {}. Checking environment variables only.",
            path.display()
        );
        Ok(None)
    }
}

/// Get string value from YAML, returning Option<String> instead of defaulting to empty string
/// This allows us to distinguish between an empty string and "not set"
fn get_yaml_string_option(doc: &Yaml, key: &str) -> Option<String> {
    let mut current = doc;
    for part in key.split('.') {
        current = &current[part];
        if current.is_badvalue() {
            return None;
        }
    }
    current.as_str().map(|s| s.to_string())
}

fn get_env_string_option(env_var: &str) -> Option<String> {
    env::var(env_var).ok().filter(|v| !v.is_empty())
}

/// Resolves a path setting. Priority: env var > YAML config > default
fn get_path(env_var: &str, yaml_option: &str, config: &Option<Yaml>, default: PathBuf) -> PathBuf {
    if let Some(path) = get_env_string_option(env_var) {
        return path.into();
    }

    if let Some(doc) = config
        && let Some(path) = get_yaml_string_option(doc, yaml_option)
    {
        return path.into();
    }

    default
}

/// Files to read cgroup membership from, in the order they are consulted:
/// the cgroup file, then the cpuset file.
pub fn get_cgroup_paths(config: &Option<Yaml>) -> Vec<PathBuf> {
    vec![
        get_path(
            "DD_CONTAINER_ID_CGROUP_FILE",
            "container_id.cgroup_file",
            config,
            procfs::self_cgroup_path(),
        ),
        get_path(
            "DD_CONTAINER_ID_CPUSET_FILE",
            "container_id.cpuset_file",
            config,
            procfs::self_cpuset_path(),
        ),
    ]
}

/// Parse a Go log level string into a log::Level
/// Unknown levels silently default to Info
fn parse_log_level(level: &str) -> log::Level {
    match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "info" => log::Level::Info,
        "warn" | "warning" => log::Level::Warn,
        "error" | "critical" => log::Level::Error,
        "off" => log::Level::Error, // Rust log crate doesn't have "off", use Error as minimal logging
        _ => log::Level::Info,
    }
}

/// Gets the log level from configuration.
/// Priority: DD_LOG_LEVEL > LOG_LEVEL > YAML config > default Warn
pub fn get_log_level(config: &Result<Option<Yaml>>) -> log::Level {
    if let Ok(level) = env::var("DD_LOG_LEVEL") {
        return parse_log_level(&level);
    }

    if let Ok(level) = env::var("LOG_LEVEL") {
        return parse_log_level(&level);
    }

    config
        .as_ref()
        .ok()
        .and_then(|opt| opt.as_ref())
        .and_then(|doc| get_yaml_string_option(doc, "log_level"))
        .map(|level| parse_log_level(&level))
        .unwrap_or(log::Level::Warn)
}
