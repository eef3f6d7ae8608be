//! Project discovery and layout
//!
//! An iris project is any directory containing a `.iris/` marker. Commands
//! discover the project by walking up from the current directory, the same
//! way git finds its repository root.
//!
//! Layout:
//! ```text
//! project/
//!   .iris/
//!     config.yaml      project-level configuration
//!     rules.yaml       classification rule set (written by init)
//!     shortids.json    session-local short id index (gitignored)
//!   incidents/
//!     INC-<ULID>.iris.yaml
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marker directory identifying a project root
pub const MARKER_DIR: &str = ".iris";

/// Directory holding incident files, relative to the root
pub const INCIDENTS_DIR: &str = "incidents";

/// File extension for incident records
pub const FILE_SUFFIX: &str = ".iris.yaml";

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not inside an iris project (no {MARKER_DIR} directory found from {searched})")]
    NotFound { searched: PathBuf },

    #[error("Already an iris project: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A discovered project root
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Walk up from the current directory to find the project root
    pub fn discover() -> Result<Self, ProjectError> {
        let cwd = std::env::current_dir().map_err(|e| ProjectError::Io {
            path: PathBuf::from("."),
            source: e,
        })?;
        Self::discover_from(&cwd)
    }

    /// Walk up from `start` to find the project root
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut dir = start;
        loop {
            if dir.join(MARKER_DIR).is_dir() {
                return Ok(Self {
                    root: dir.to_path_buf(),
                });
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => {
                    return Err(ProjectError::NotFound {
                        searched: start.to_path_buf(),
                    })
                }
            }
        }
    }

    /// Create the project skeleton in `dir`
    ///
    /// Fails if `dir` is already a project root. Callers write the config and
    /// rules files afterwards.
    pub fn init(dir: &Path) -> Result<Self, ProjectError> {
        if dir.join(MARKER_DIR).is_dir() {
            return Err(ProjectError::AlreadyInitialized(dir.to_path_buf()));
        }
        for sub in [MARKER_DIR, INCIDENTS_DIR] {
            let path = dir.join(sub);
            std::fs::create_dir_all(&path).map_err(|e| ProjectError::Io { path, source: e })?;
        }
        Ok(Self {
            root: dir.to_path_buf(),
        })
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding incident files
    pub fn incidents_dir(&self) -> PathBuf {
        self.root.join(INCIDENTS_DIR)
    }

    /// Path of the record file for an incident id string
    pub fn incident_path(&self, id: &str) -> PathBuf {
        self.incidents_dir().join(format!("{}{}", id, FILE_SUFFIX))
    }

    /// Path of the project config file
    pub fn config_path(&self) -> PathBuf {
        self.root.join(MARKER_DIR).join("config.yaml")
    }

    /// Path of the project rules file
    pub fn rules_path(&self) -> PathBuf {
        self.root.join(MARKER_DIR).join("rules.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_discover() {
        let tmp = TempDir::new().unwrap();
        Project::init(tmp.path()).unwrap();

        let project = Project::discover_from(tmp.path()).unwrap();
        assert_eq!(project.root(), tmp.path());
        assert!(project.incidents_dir().is_dir());
    }

    #[test]
    fn test_discover_walks_up_from_subdirectory() {
        let tmp = TempDir::new().unwrap();
        Project::init(tmp.path()).unwrap();
        let nested = tmp.path().join("incidents");

        let project = Project::discover_from(&nested).unwrap();
        assert_eq!(project.root(), tmp.path());
    }

    #[test]
    fn test_discover_fails_outside_project() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            Project::discover_from(tmp.path()),
            Err(ProjectError::NotFound { .. })
        ));
    }

    #[test]
    fn test_init_twice_fails() {
        let tmp = TempDir::new().unwrap();
        Project::init(tmp.path()).unwrap();
        assert!(matches!(
            Project::init(tmp.path()),
            Err(ProjectError::AlreadyInitialized(_))
        ));
    }

    #[test]
    fn test_incident_path() {
        let tmp = TempDir::new().unwrap();
        let project = Project::init(tmp.path()).unwrap();
        let path = project.incident_path("INC-01ARZ3NDEKTSV4RRFFQ69G5FAV");
        assert!(path
            .to_string_lossy()
            .ends_with("incidents/INC-01ARZ3NDEKTSV4RRFFQ69G5FAV.iris.yaml"));
    }
}
