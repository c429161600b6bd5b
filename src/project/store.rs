//! Persistent saved projects
//!
//! Projects are keyed by a generated id and stored as JSON in
//! `~/.config/livepen/projects.json`. A missing or corrupt file is treated
//! as an empty store so startup is never blocked.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::ProjectSnapshot;

/// A single saved project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProject {
    pub name: String,
    #[serde(flatten)]
    pub content: ProjectSnapshot,
    /// When the project was saved (Unix epoch milliseconds)
    pub timestamp: u64,
}

fn now_epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Persistent project store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStore {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    projects: BTreeMap<String, SavedProject>,
}

impl ProjectStore {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load the store from the config directory
    pub fn load() -> Self {
        match crate::config_paths::projects_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, starting with no projects");
                Self::default()
            }
        }
    }

    /// Load the store from a specific file. Missing or corrupt storage
    /// yields an empty store.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read projects at {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str::<Self>(&contents) {
            Ok(store) => {
                tracing::debug!(
                    "Loaded {} projects from {}",
                    store.projects.len(),
                    path.display()
                );
                store
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt project store at {}: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the store to the config directory
    pub fn save(&self) -> Result<()> {
        let path =
            crate::config_paths::projects_file().context("No config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let stored = Self {
            version: Self::CURRENT_VERSION,
            projects: self.projects.clone(),
        };
        let contents = serde_json::to_string_pretty(&stored)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write projects to {}", path.display()))?;
        Ok(())
    }

    /// Save a project under a freshly generated id, returning the id
    pub fn insert(&mut self, name: &str, content: ProjectSnapshot) -> String {
        let timestamp = now_epoch_millis();
        let mut id = format!("project-{}", timestamp);
        let mut suffix = 1;
        while self.projects.contains_key(&id) {
            id = format!("project-{}-{}", timestamp, suffix);
            suffix += 1;
        }
        self.projects.insert(
            id.clone(),
            SavedProject {
                name: name.to_string(),
                content,
                timestamp,
            },
        );
        id
    }

    pub fn get(&self, id: &str) -> Option<&SavedProject> {
        self.projects.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<SavedProject> {
        self.projects.remove(id)
    }

    /// All projects, newest first
    pub fn list(&self) -> Vec<(&str, &SavedProject)> {
        let mut entries: Vec<(&str, &SavedProject)> = self
            .projects
            .iter()
            .map(|(id, project)| (id.as_str(), project))
            .collect();
        entries.sort_by(|a, b| b.1.timestamp.cmp(&a.1.timestamp).then(b.0.cmp(a.0)));
        entries
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ProjectSnapshot {
        ProjectSnapshot::new("<p>hi</p>", "p{}", "go();")
    }

    #[test]
    fn test_insert_generates_unique_ids() {
        let mut store = ProjectStore::default();
        let a = store.insert("one", snapshot());
        let b = store.insert("two", snapshot());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&a).map(|p| p.name.as_str()), Some("one"));
    }

    #[test]
    fn test_list_is_newest_first() {
        let mut store = ProjectStore::default();
        let old = store.insert("old", snapshot());
        let new = store.insert("new", snapshot());
        store.projects.get_mut(&old).unwrap().timestamp = 1;
        store.projects.get_mut(&new).unwrap().timestamp = 2;
        let names: Vec<&str> = store.list().iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, vec!["new", "old"]);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        let mut store = ProjectStore::default();
        let id = store.insert("demo", snapshot());
        store.save_to(&path).unwrap();

        let loaded = ProjectStore::load_from(&path);
        assert_eq!(loaded.version, ProjectStore::CURRENT_VERSION);
        assert_eq!(loaded.get(&id).map(|p| &p.content), Some(&snapshot()));
    }

    #[test]
    fn test_stored_json_uses_flat_text_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        let mut store = ProjectStore::default();
        store.insert("demo", snapshot());
        store.save_to(&path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"markupText\": \"<p>hi</p>\""));
        assert!(json.contains("\"styleText\": \"p{}\""));
        assert!(json.contains("\"scriptText\": \"go();\""));
    }

    #[test]
    fn test_missing_and_corrupt_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.json");
        assert!(ProjectStore::load_from(&missing).is_empty());

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "{ not json").unwrap();
        assert!(ProjectStore::load_from(&corrupt).is_empty());
    }

    #[test]
    fn test_remove() {
        let mut store = ProjectStore::default();
        let id = store.insert("demo", snapshot());
        assert!(store.remove(&id).is_some());
        assert!(store.get(&id).is_none());
    }
}
