//! Venue records extracted from map elements

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A nearby venue extracted from a tagged map element.
///
/// Upstream tagging is free text and may omit either field; an absent tag
/// maps to `None`, never to an error.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Venue {
    /// Display name from the `name` tag
    pub name: Option<String>,
    /// Street address from the `addr:street` tag
    pub address: Option<String>,
}

impl Venue {
    /// Extract name and street address from an element's tag map.
    #[must_use]
    pub fn from_tags(tags: &HashMap<String, String>) -> Self {
        Self {
            name: tags.get("name").cloned(),
            address: tags.get("addr:street").cloned(),
        }
    }
}
