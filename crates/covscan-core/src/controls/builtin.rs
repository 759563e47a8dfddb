use crate::controls::schema::TaxonomyDef;
use crate::error::CovscanError;

const ISO27001_ANNEX_A_JSON: &str = include_str!("../../../../controls/iso27001-annex-a.json");

/// Available predefined taxonomies.
pub const PRESETS: &[&str] = &["iso27001"];

/// Load a predefined taxonomy by name.
pub fn load_preset(name: &str) -> Result<TaxonomyDef, CovscanError> {
    match name {
        "iso27001" => {
            let taxonomy: TaxonomyDef = serde_json::from_str(ISO27001_ANNEX_A_JSON)?;
            Ok(taxonomy)
        }
        _ => Err(CovscanError::TaxonomyInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// Name of the taxonomy used when the caller supplies none.
pub const DEFAULT_PRESET: &str = "iso27001";
