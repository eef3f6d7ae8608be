//! Short ID system for easier incident selection
//!
//! Full incident IDs are 30 characters; nobody wants to type them. Listing
//! incidents assigns session-local aliases (`INC@1`, or just `@1`) that map
//! back to full IDs. The index is persisted in `.iris/shortids.json` and
//! regenerated whenever incidents are listed, so aliases are stable between a
//! `list` and the follow-up `show`/`classify`.

use std::collections::HashMap;
use std::fs;

use crate::core::identity::EntityId;
use crate::core::project::{Project, MARKER_DIR};

/// Index file location within a project
const INDEX_FILE: &str = "shortids.json";

/// A mapping of short IDs to full incident IDs
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ShortIdIndex {
    /// Maps "INC@N" to the full ID string
    entries: HashMap<String, String>,

    /// Next alias number to hand out
    next_id: u32,

    /// Reverse lookup, rebuilt on load
    #[serde(skip)]
    reverse: HashMap<String, String>,
}

impl ShortIdIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 1,
            reverse: HashMap::new(),
        }
    }

    /// Load the index from a project, or create empty if not found
    pub fn load(project: &Project) -> Self {
        let path = project.root().join(MARKER_DIR).join(INDEX_FILE);
        let mut index: Self = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        if index.next_id == 0 {
            index.next_id = 1;
        }
        index.rebuild_reverse();
        index
    }

    /// Persist the index into the project
    pub fn save(&self, project: &Project) -> std::io::Result<()> {
        let path = project.root().join(MARKER_DIR).join(INDEX_FILE);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
    }

    fn rebuild_reverse(&mut self) {
        self.reverse = self
            .entries
            .iter()
            .map(|(short, full)| (full.clone(), short.clone()))
            .collect();
    }

    /// Assign an alias to an ID, reusing any existing one
    pub fn assign(&mut self, id: &EntityId) -> String {
        let full = id.to_string();
        if let Some(short) = self.reverse.get(&full) {
            return short.clone();
        }
        let short = format!("INC@{}", self.next_id);
        self.next_id += 1;
        self.entries.insert(short.clone(), full.clone());
        self.reverse.insert(full, short.clone());
        short
    }

    /// Resolve user input to a full ID string
    ///
    /// Accepts `INC@N`, bare `@N`, or an already-full ID. Unknown aliases
    /// resolve to None; full IDs pass through untouched.
    pub fn resolve(&self, input: &str) -> Option<String> {
        if let Some(n) = input.strip_prefix('@') {
            return self.entries.get(&format!("INC@{}", n)).cloned();
        }
        if input.contains('@') {
            return self.entries.get(&input.to_uppercase()).cloned();
        }
        Some(input.to_string())
    }

    /// Look up the alias for a full ID, if one was assigned
    pub fn get_short_id(&self, full_id: &str) -> Option<String> {
        self.reverse.get(full_id).cloned()
    }
}
