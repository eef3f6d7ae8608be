//! Schema registry - embedded JSON schemas

use rust_embed::Embed;

#[derive(Embed)]
#[folder = "schemas/"]
struct EmbeddedSchemas;

/// Filename of the incident record schema
const INCIDENT_SCHEMA: &str = "incident.schema.json";

/// Registry of JSON schemas for file validation
pub struct SchemaRegistry {
    incident: String,
}

impl SchemaRegistry {
    /// Create a new schema registry with embedded schemas
    pub fn new() -> Self {
        let incident = EmbeddedSchemas::get(INCIDENT_SCHEMA)
            .and_then(|file| String::from_utf8(file.data.into_owned()).ok())
            .unwrap_or_default();
        Self { incident }
    }

    /// The JSON schema for incident record files
    pub fn incident_schema(&self) -> &str {
        &self.incident
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
