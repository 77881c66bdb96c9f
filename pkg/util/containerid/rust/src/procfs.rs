// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static PROC_ROOT: OnceLock<PathBuf> = OnceLock::new();

fn resolve_root_path() -> PathBuf {
    if let Ok(v) = env::var("HOST_PROC") {
        return v.into();
    }

    if env::var("DOCKER_DD_AGENT").is_ok() && Path::new("/host").exists() {
        return "/host/proc".into();
    }

    "/proc".into()
}

pub fn root_path() -> &'static Path {
    PROC_ROOT.get_or_init(resolve_root_path)
}

/// Cgroup membership of the current process.
pub fn self_cgroup_path() -> PathBuf {
    root_path().join("self").join("cgroup")
}

/// Cpuset of the current process.
pub fn self_cpuset_path() -> PathBuf {
    root_path().join("self").join("cpuset")
}
