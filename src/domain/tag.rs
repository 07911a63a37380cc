// src/domain/tag.rs
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TAG_COLOUR;
use crate::domain::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default = "default_colour")]
    pub colour: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDraft {
    pub name: String,
    pub colour: String,
}

impl TagDraft {
    /// Missing or blank colours become the default black
    pub fn new(name: impl Into<String>, colour: Option<&str>) -> Self {
        let colour = colour
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_TAG_COLOUR);
        Self {
            name: name.into(),
            colour: colour.to_string(),
        }
    }
}

fn default_colour() -> String {
    DEFAULT_TAG_COLOUR.to_string()
}
