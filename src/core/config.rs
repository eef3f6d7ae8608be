//! Layered configuration
//!
//! Project config (`.iris/config.yaml`) overrides user config
//! (`~/.config/iris/config.yaml` via the platform directories), which
//! overrides environment fallbacks. Absent files are fine; every field has a
//! sensible default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::project::Project;

/// User- or project-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default author name for new incidents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Editor command; falls back to $EDITOR / $VISUAL, then vi
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Path to a rules file, overriding the project default location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<PathBuf>,
}

impl Config {
    /// Load config for a project, layering project over user settings
    pub fn load(project: &Project) -> Self {
        let user = Self::read_file(Self::user_config_path().as_deref());
        let local = Self::read_file(Some(&project.config_path()));
        user.merged_with(local)
    }

    /// Load user-level config only (for commands outside a project)
    pub fn load_user() -> Self {
        Self::read_file(Self::user_config_path().as_deref())
    }

    fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "iris")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn read_file(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_yml::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn merged_with(self, over: Self) -> Self {
        Self {
            author: over.author.or(self.author),
            editor: over.editor.or(self.editor),
            rules: over.rules.or(self.rules),
        }
    }

    /// Effective author name, falling back to $USER
    pub fn author(&self) -> String {
        self.author
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Effective rules file path for a project
    ///
    /// An explicit `rules:` setting wins; otherwise `.iris/rules.yaml` when it
    /// exists. None means the built-in defaults.
    pub fn rules_path(&self, project: &Project) -> Option<PathBuf> {
        if let Some(ref path) = self.rules {
            let resolved = if path.is_absolute() {
                path.clone()
            } else {
                project.root().join(path)
            };
            return Some(resolved);
        }
        let default = project.rules_path();
        default.exists().then_some(default)
    }

    /// Open a file in the configured editor
    pub fn run_editor(&self, path: &Path) -> std::io::Result<()> {
        let editor = self
            .editor
            .clone()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| "vi".to_string());

        // The editor setting may carry arguments ("code --wait").
        let mut parts = editor.split_whitespace();
        let program = parts.next().unwrap_or("vi");
        let status = std::process::Command::new(program)
            .args(parts)
            .arg(path)
            .status()?;

        if !status.success() {
            return Err(std::io::Error::other(format!(
                "editor '{}' exited with {}",
                editor, status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_project_config_overrides_user() {
        let user = Config {
            author: Some("user".to_string()),
            editor: Some("vim".to_string()),
            rules: None,
        };
        let local = Config {
            author: Some("project".to_string()),
            editor: None,
            rules: None,
        };
        let merged = user.merged_with(local);
        assert_eq!(merged.author.as_deref(), Some("project"));
        assert_eq!(merged.editor.as_deref(), Some("vim"));
    }

    #[test]
    fn test_rules_path_prefers_explicit_setting() {
        let tmp = TempDir::new().unwrap();
        let project = Project::init(tmp.path()).unwrap();

        let config = Config {
            rules: Some(PathBuf::from("custom-rules.yaml")),
            ..Config::default()
        };
        let path = config.rules_path(&project).unwrap();
        assert_eq!(path, tmp.path().join("custom-rules.yaml"));
    }

    #[test]
    fn test_rules_path_uses_project_file_when_present() {
        let tmp = TempDir::new().unwrap();
        let project = Project::init(tmp.path()).unwrap();
        let config = Config::default();

        assert!(config.rules_path(&project).is_none());

        std::fs::write(project.rules_path(), "{}").unwrap();
        assert_eq!(config.rules_path(&project), Some(project.rules_path()));
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let config = Config {
            author: Some("j.doe".to_string()),
            editor: None,
            rules: None,
        };
        let yaml = serde_yml::to_string(&config).unwrap();
        assert!(yaml.contains("author: j.doe"));
        assert!(!yaml.contains("editor"));
    }
}
