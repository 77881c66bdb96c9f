// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

use std::path::PathBuf;

use log::debug;

use crate::container_id::ContainerId;
use crate::matcher;
use crate::procfs;
use crate::source::{CgroupSource, FileSource};

/// Finds the container the current process runs in by consulting an ordered
/// list of cgroup text sources.
///
/// A source that cannot be read counts as empty text: not being in a
/// container (or not being on Linux at all) is an expected state.
pub struct Detector {
    sources: Vec<Box<dyn CgroupSource>>,
}

impl Detector {
    /// A detector without any source, which never finds a container.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Reads `self/cgroup`, then `self/cpuset`, under the procfs root.
    pub fn from_procfs() -> Self {
        Self::from_paths([procfs::self_cgroup_path(), procfs::self_cpuset_path()])
    }

    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths
            .into_iter()
            .fold(Self::new(), |detector, path| {
                detector.with_source(FileSource::new(path))
            })
    }

    pub fn with_source(mut self, source: impl CgroupSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn detect(&self) -> Option<ContainerId> {
        for source in &self.sources {
            let text = match source.read_text() {
                Ok(text) => text,
                Err(e) => {
                    debug!("Skipping cgroup source: {e}");
                    continue;
                }
            };

            match matcher::find(&text) {
                Some(id) => {
                    debug!("Found container id {} in {}", id, source.describe());
                    return Some(id);
                }
                None => debug!("No container id found in {}", source.describe()),
            }
        }

        None
    }

    /// The detected container ID, or an empty string when the process does
    /// not appear to run in a container.
    pub fn current_container_id(&self) -> String {
        self.detect().map(String::from).unwrap_or_default()
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::from_procfs()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use crate::errors::Error;
    use crate::source::TextSource;
    use std::fs;

    const ECS_ID: &str = "3c94e08259a6235781bb65f3dec91150c92e9d414ecc410d6245687392d3900f";
    const CPUSET_ID: &str = "eede6bd9e72f5d783a4bfb845bd71f310e974cb26987328a5d15704e23a8d6cb";

    struct FailingSource;

    impl CgroupSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn read_text(&self) -> Result<String, Error> {
            Err(Error::CgroupRead {
                path: PathBuf::from("/proc/self/cgroup"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }
    }

    #[test]
    fn test_no_sources() {
        let detector = Detector::new();
        assert_eq!(detector.detect(), None);
        assert_eq!(detector.current_container_id(), "");
    }

    #[test]
    fn test_text_source() {
        let detector =
            Detector::new().with_source(TextSource::from(include_str!("../testdata/cgroup.ecs")));
        assert_eq!(detector.current_container_id(), ECS_ID);
    }

    #[test]
    fn test_falls_through_to_cpuset() {
        let detector = Detector::new()
            .with_source(TextSource::from(include_str!("../testdata/cgroup.linux")))
            .with_source(TextSource::from(include_str!("../testdata/cpuset.docker")));
        assert_eq!(detector.current_container_id(), CPUSET_ID);
    }

    #[test]
    fn test_first_source_wins() {
        let detector = Detector::new()
            .with_source(TextSource::from(include_str!("../testdata/cgroup.ecs")))
            .with_source(TextSource::from(include_str!("../testdata/cpuset.docker")));
        assert_eq!(detector.current_container_id(), ECS_ID);
    }

    #[test]
    fn test_task_id_is_not_a_container_id() {
        let task_id = "a".repeat(64);
        let cgroup = format!("4:cpuset:/ecs/{task_id}/628967a1-46b4-4a8a-84ff-605128f4679e\n");
        let detector = Detector::new().with_source(TextSource::from(cgroup.as_str()));
        assert_eq!(detector.detect(), None);

        let detector =
            detector.with_source(TextSource::from(include_str!("../testdata/cpuset.docker")));
        assert_eq!(detector.current_container_id(), CPUSET_ID);
    }

    #[test]
    fn test_read_errors_are_skipped() {
        let detector = Detector::new()
            .with_source(FailingSource)
            .with_source(TextSource::from(include_str!("../testdata/cpuset.docker")));
        assert_eq!(detector.current_container_id(), CPUSET_ID);

        let detector = Detector::new().with_source(FailingSource);
        assert_eq!(detector.current_container_id(), "");
    }

    #[test]
    fn test_from_paths() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let cpuset = dir.path().join("cpuset");
        fs::write(&cpuset, format!("/docker/{CPUSET_ID}\n")).unwrap();

        let detector = Detector::from_paths([missing, cpuset]);
        assert_eq!(detector.detect().unwrap().as_str(), CPUSET_ID);
    }
}
