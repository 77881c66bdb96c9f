// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::Error;
use crate::matcher::is_container_id;

/// Length of the abbreviated ID printed by the Docker CLI.
const SHORT_ID_LEN: usize = 12;

/// A full container ID: 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn short(&self) -> &str {
        self.0.get(..SHORT_ID_LEN).unwrap_or(&self.0)
    }

    /// Wraps a run the matcher already validated.
    pub(crate) fn from_match(id: &str) -> Self {
        debug_assert!(is_container_id(id));
        Self(id.to_string())
    }
}

impl TryFrom<String> for ContainerId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_container_id(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidContainerId { value })
        }
    }
}

impl TryFrom<&str> for ContainerId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl FromStr for ContainerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContainerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ContainerId> for String {
    fn from(id: ContainerId) -> Self {
        id.0
    }
}
