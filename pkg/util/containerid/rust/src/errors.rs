// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read cgroup data from {}: {source}", .path.display())]
    CgroupRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid container id: {value:?}")]
    InvalidContainerId { value: String },
}
