//! JSON-Schema validation of incident record files
//!
//! The schema guards the file-format boundary: hand-edited YAML gets checked
//! for structure (unknown enum values, negative numbers, missing required
//! fields) before anything tries to deserialize it into entity types. The
//! engine separately enforces the semantic invariants the schema cannot
//! express.

use thiserror::Error;

use crate::schema::registry::SchemaRegistry;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Embedded schema is not valid JSON: {0}")]
    BadJson(#[from] serde_json::Error),

    #[error("Embedded schema failed to compile: {0}")]
    Compile(String),
}

/// A compiled validator for incident record files
pub struct Validator {
    compiled: jsonschema::Validator,
}

impl Validator {
    /// Compile the embedded incident schema
    pub fn new(registry: &SchemaRegistry) -> Result<Self, SchemaError> {
        let schema: serde_json::Value = serde_json::from_str(registry.incident_schema())?;
        let compiled =
            jsonschema::validator_for(&schema).map_err(|e| SchemaError::Compile(e.to_string()))?;
        Ok(Self { compiled })
    }

    /// Validate a parsed document; returns one message per violation
    pub fn validate_value(&self, instance: &serde_json::Value) -> Vec<String> {
        self.compiled
            .iter_errors(instance)
            .map(|err| {
                let path = err.instance_path.to_string();
                if path.is_empty() {
                    err.to_string()
                } else {
                    format!("{}: {}", path, err)
                }
            })
            .collect()
    }

    /// Validate raw YAML content; returns one message per violation
    ///
    /// YAML is parsed into a JSON value first; a syntax error comes back as a
    /// single violation rather than a panic.
    pub fn validate_yaml(&self, content: &str) -> Vec<String> {
        match serde_yml::from_str::<serde_json::Value>(content) {
            Ok(value) => self.validate_value(&value),
            Err(e) => vec![format!("not parseable as YAML: {}", e)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::entities::incident::Incident;

    fn validator() -> Validator {
        Validator::new(&SchemaRegistry::new()).unwrap()
    }

    fn sample_yaml() -> String {
        let inc = Incident::new(
            "Acme Chemicals".to_string(),
            NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            "j.doe".to_string(),
        );
        serde_yml::to_string(&inc).unwrap()
    }

    #[test]
    fn test_generated_record_passes_schema() {
        let violations = validator().validate_yaml(&sample_yaml());
        assert!(violations.is_empty(), "unexpected violations: {:?}", violations);
    }

    #[test]
    fn test_negative_count_fails_schema() {
        let yaml = sample_yaml().replace("deaths: 0", "deaths: -1");
        let violations = validator().validate_yaml(&yaml);
        assert!(!violations.is_empty());
        assert!(violations.iter().any(|v| v.contains("deaths")));
    }

    #[test]
    fn test_unknown_enum_value_fails_schema() {
        let yaml = sample_yaml().replace("homes_damaged: none", "homes_damaged: several");
        let violations = validator().validate_yaml(&yaml);
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_missing_required_field_fails_schema() {
        let yaml = sample_yaml()
            .lines()
            .filter(|l| !l.starts_with("company:"))
            .collect::<Vec<_>>()
            .join("\n");
        let violations = validator().validate_yaml(&yaml);
        assert!(violations.iter().any(|v| v.contains("company")));
    }

    #[test]
    fn test_garbage_yaml_reports_single_violation() {
        let violations = validator().validate_yaml("{ not closed");
        assert_eq!(violations.len(), 1);
    }
}
