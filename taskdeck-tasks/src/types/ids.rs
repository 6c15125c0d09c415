//! Typed identifiers for task entities
//!
//! Every entity carries a ULID string behind a newtype so ids for different
//! entity kinds cannot be mixed up at compile time.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new id backed by a fresh monotonic ULID
            pub fn new() -> Self {
                Self(taskdeck_common::generate_monotonic_ulid_string())
            }

            /// Wrap an existing id string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// View the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

entity_id! {
    /// Identifier of a task
    TaskId
}

entity_id! {
    /// Identifier of a subtask within a task
    SubtaskId
}

entity_id! {
    /// Identifier of a tag
    TagId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_ulids() {
        let id = TaskId::new();
        assert_eq!(id.as_str().len(), 26);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(TaskId::new(), TaskId::new());
    }

    #[test]
    fn test_from_str_roundtrip() {
        let id = TagId::from("urgent");
        assert_eq!(id.as_str(), "urgent");
        assert_eq!(id.to_string(), "urgent");
    }

    #[test]
    fn test_serde_transparent() {
        let id = TaskId::from("task-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"task-1\"");
        let back: TaskId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
