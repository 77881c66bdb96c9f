// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! Suppliers of cgroup membership text.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::Error;

/// Something that can hand out the contents of a cgroup or cpuset
/// pseudo-file.
pub trait CgroupSource: Send + Sync {
    /// Human readable origin of the text, used in logs.
    fn describe(&self) -> String;

    fn read_text(&self) -> Result<String, Error>;
}

/// Reads the text from a file on disk, typically under procfs.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CgroupSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> Result<String, Error> {
        fs::read_to_string(&self.path).map_err(|source| Error::CgroupRead {
            path: self.path.clone(),
            source,
        })
    }
}

/// Text that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct TextSource(pub String);

impl From<&str> for TextSource {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl CgroupSource for TextSource {
    fn describe(&self) -> String {
        "<text>".to_string()
    }

    fn read_text(&self) -> Result<String, Error> {
        Ok(self.0.clone())
    }
}
