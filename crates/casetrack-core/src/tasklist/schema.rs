//! JSON Schema validation for task list configurations.
//!
//! Every configuration, built in or loaded from a file, is checked against
//! config/tasklist.schema.json before it is deserialised.

use std::sync::OnceLock;

use crate::registry::ConfigurationError;

/// Embedded task list schema.
const TASKLIST_SCHEMA_JSON: &str = include_str!("../../../../config/tasklist.schema.json");

/// Compiled validator, built on first use.
static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

fn get_validator() -> Result<&'static jsonschema::Validator, ConfigurationError> {
    let result = COMPILED_SCHEMA.get_or_init(|| {
        let schema_value: serde_json::Value = serde_json::from_str(TASKLIST_SCHEMA_JSON)
            .map_err(|e| format!("Invalid schema JSON: {}", e))?;

        jsonschema::options()
            .build(&schema_value)
            .map_err(|e| format!("Failed to compile schema: {}", e))
    });

    result
        .as_ref()
        .map_err(|e| ConfigurationError::InvalidConfig(e.clone()))
}

/// Validate a configuration value against the schema.
///
/// Every violation is reported, each with the path it was found at.
pub fn validate_tasklist_schema(config: &serde_json::Value) -> Result<(), ConfigurationError> {
    let validator = get_validator()?;

    let errors: Vec<String> = validator
        .iter_errors(config)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidConfig(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_config_passes_schema() {
        let value = json!({
            "name": "Test",
            "link_template": "/cases/${CASE_ID}/${EVENT_ID}",
            "sections": [{ "title": "Case", "events": ["caseName"] }]
        });
        assert!(validate_tasklist_schema(&value).is_ok());
    }

    #[test]
    fn test_missing_sections_fails() {
        let value = json!({
            "name": "Test",
            "link_template": "/cases/${CASE_ID}"
        });
        let err = validate_tasklist_schema(&value).unwrap_err();
        assert!(err.to_string().contains("sections"));
    }

    #[test]
    fn test_empty_section_fails() {
        let value = json!({
            "name": "Test",
            "link_template": "/cases/${CASE_ID}",
            "sections": [{ "title": "Case", "events": [] }]
        });
        assert!(validate_tasklist_schema(&value).is_err());
    }

    #[test]
    fn test_unknown_key_fails() {
        let value = json!({
            "name": "Test",
            "link_template": "/cases/${CASE_ID}",
            "sections": [{ "title": "Case", "events": ["caseName"] }],
            "colour": "blue"
        });
        assert!(validate_tasklist_schema(&value).is_err());
    }
}
