pub mod builtin;
pub mod schema;

use crate::error::CovscanError;
use schema::TaxonomyDef;
use std::collections::HashSet;
use std::path::Path;

/// Load a control taxonomy from a JSON file.
pub fn load_taxonomy(path: &Path) -> Result<TaxonomyDef, CovscanError> {
    let content = std::fs::read_to_string(path).map_err(|e| CovscanError::TaxonomyLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let taxonomy: TaxonomyDef =
        serde_json::from_str(&content).map_err(|e| CovscanError::TaxonomyLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_taxonomy(&taxonomy)?;
    Ok(taxonomy)
}

/// Parse a taxonomy from a JSON string (no file path context).
pub fn parse_taxonomy_str(json: &str) -> Result<TaxonomyDef, CovscanError> {
    let taxonomy: TaxonomyDef = serde_json::from_str(json).map_err(CovscanError::Json)?;
    validate_taxonomy(&taxonomy)?;
    Ok(taxonomy)
}

/// Validate that a taxonomy is well-formed.
pub fn validate_taxonomy(taxonomy: &TaxonomyDef) -> Result<(), CovscanError> {
    if taxonomy.controls.is_empty() {
        return Err(CovscanError::TaxonomyInvalid(
            "controls must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for control in &taxonomy.controls {
        if control.id.trim().is_empty() {
            return Err(CovscanError::TaxonomyInvalid(
                "control id must not be empty".into(),
            ));
        }
        if control.description.trim().is_empty() {
            return Err(CovscanError::TaxonomyInvalid(format!(
                "control '{}' has an empty description",
                control.id
            )));
        }
        if !seen.insert(control.id.clone()) {
            return Err(CovscanError::TaxonomyInvalid(format!(
                "duplicate control id '{}'",
                control.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_taxonomy() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "controls": [
                { "id": "A.5", "description": "information security policies" },
                { "id": "A.9", "description": "access control" }
            ]
        }"#;
        let taxonomy = parse_taxonomy_str(json).unwrap();
        assert_eq!(taxonomy.name, "Test");
        assert_eq!(taxonomy.len(), 2);
        assert_eq!(taxonomy.controls[0].id, "A.5");
    }

    #[test]
    fn test_empty_controls_rejected() {
        let json = r#"{ "name": "Bad", "version": "1.0", "controls": [] }"#;
        assert!(parse_taxonomy_str(json).is_err());
    }

    #[test]
    fn test_empty_id_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "controls": [ { "id": "  ", "description": "something" } ]
        }"#;
        assert!(parse_taxonomy_str(json).is_err());
    }

    #[test]
    fn test_empty_description_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "controls": [ { "id": "A.5", "description": "" } ]
        }"#;
        assert!(parse_taxonomy_str(json).is_err());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "controls": [
                { "id": "A.5", "description": "policies" },
                { "id": "A.5", "description": "again" }
            ]
        }"#;
        assert!(parse_taxonomy_str(json).is_err());
    }
}
