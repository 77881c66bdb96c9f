// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! Extraction of the container ID from cgroup membership text.
//!
//! The text is what the kernel exposes in `/proc/<pid>/cgroup`, one line per
//! hierarchy:
//!
//! ```text
//! 9:perf_event:/ecs/628967a1-46b4-4a8a-84ff-605128f4679e/3c94e08259a6235781bb65f3dec91150c92e9d414ecc410d6245687392d3900f
//! 13:name=systemd:/docker-ce/docker/18862cabc2e0d24142cf93c46ccb6e070c2ea7b996c81c0311ec0309abcbcdfb
//! 1:name=systemd:/kubepods.slice/.../docker-7b8952daecf4c0e44bbcefe1b5c5ebc7b4839d4eefeccefe694709d3809b6199.scope
//! ```
//!
//! or a bare cpuset path such as `/docker/<id>`. The container ID is a run of
//! exactly 64 lowercase hex characters in the last segment of the path. Outer
//! segments are never looked at, so an enclosing scope (an ECS task, for
//! instance) is not picked over the container even when it is 64 hex
//! characters itself.

use std::sync::LazyLock;

use regex::Regex;

use crate::container_id::ContainerId;

/// Number of hex characters in a full container ID.
pub const CONTAINER_ID_LEN: usize = 64;

#[allow(clippy::expect_used)]
static CGROUP_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+:[^:]*:(.*)$").expect("cgroup line regex is valid"));

// Uppercase letters are part of a run so that they act as hex for boundary
// purposes; such runs are rejected afterwards.
#[allow(clippy::expect_used)]
static HEX_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9a-fA-F]+").expect("hex run regex is valid"));

/// Returns the path part of a cgroup line, or the line itself for a bare
/// cpuset path. Anything else is not a cgroup line.
fn cgroup_path(line: &str) -> Option<&str> {
    if let Some(captures) = CGROUP_LINE_REGEX.captures(line) {
        return captures.get(1).map(|path| path.as_str());
    }

    line.starts_with('/').then_some(line)
}

pub(crate) fn is_container_id(value: &str) -> bool {
    value.len() == CONTAINER_ID_LEN
        && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Container ID in the innermost segment of a cgroup path. Decorations around
/// the ID, as in `docker-<id>.scope`, are skipped over.
fn innermost_container_id(path: &str) -> Option<&str> {
    let segment = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    HEX_RUN_REGEX
        .find_iter(segment)
        .map(|run| run.as_str())
        .filter(|run| is_container_id(run))
        .last()
}

/// Finds the container ID in cgroup or cpuset text.
///
/// Lines are scanned top to bottom and the first one carrying an ID wins.
/// Every hierarchy of a containerized process normally points at the same
/// container, so the result does not depend on subsystem ordering.
pub fn find_container_id(text: &str) -> Option<&str> {
    text.lines()
        .map(str::trim)
        .filter_map(cgroup_path)
        .find_map(innermost_container_id)
}

/// [`find_container_id`] wrapped into a [`ContainerId`].
pub(crate) fn find(text: &str) -> Option<ContainerId> {
    find_container_id(text).map(ContainerId::from_match)
}

/// Same as [`find_container_id`], with an empty string meaning that no
/// container context was detected.
pub fn match_container_id(text: &str) -> &str {
    find_container_id(text).unwrap_or_default()
}
