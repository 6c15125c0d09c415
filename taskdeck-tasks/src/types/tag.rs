//! Tag type

use super::ids::TagId;
use serde::{Deserialize, Serialize};

/// A tag categorizes tasks.
///
/// Tags have a ULID-based `id` for stable identity and a human-readable
/// `name`. Color defaults to a deterministic auto-color based on the name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    /// 6-character hex color code without `#`
    pub color: String,
}

impl Tag {
    /// Create a new tag with a ULID and an auto-color based on the name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let color = crate::auto_color::auto_color(&name).to_string();
        Self {
            id: TagId::new(),
            name,
            color,
        }
    }

    /// Create a new tag with an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}
