use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptive record of a single numbered collectible.
///
/// The three required keys serialize in declaration order, so files
/// produced from this struct always start with `name`, `description`
/// and `image`. Keys beyond those are collected into `extra` when a
/// pre-existing file is deserialized and written back verbatim, which
/// is what lets the editor pass mutate a record instead of replacing it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenMetadata {
    /// Build the record for one serial number.
    ///
    /// Every field embeds the token label `{prefix}-{serial}`:
    /// the name is the label itself, the description appends the label
    /// to the configured template, and the image points at
    /// `{image_base}/{label}.png`.
    pub fn with_serial(
        serial: u64,
        name_prefix: &str,
        description_template: &str,
        image_base: &str,
    ) -> Self {
        let label = format!("{}-{}", name_prefix, serial);
        Self {
            name: label.clone(),
            description: format!("{} {}", description_template, label),
            image: format!("{}/{}.png", image_base, label),
            extra: Map::new(),
        }
    }
}
