use serde::{Deserialize, Serialize};
use std::fmt;

/// Declare a newtype id for one entity kind.
///
/// Ids are plain strings on the wire (`"t1"`, `"p2"`, ...) but distinct
/// types in the API, so a `TagId` can never be passed where a `ProjectId`
/// is expected.
macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                $name(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`TagEntity`](crate::model::TagEntity)
    TagId
);
entity_id!(
    /// Identifier of a [`ProjectEntity`](crate::model::ProjectEntity)
    ProjectId
);
entity_id!(
    /// Identifier of a [`TodoEntity`](crate::model::TodoEntity)
    TodoId
);
entity_id!(
    /// Identifier of a [`TaskEntity`](crate::model::TaskEntity)
    TaskId
);
entity_id!(
    /// Identifier of a [`ReminderEntity`](crate::model::ReminderEntity)
    ReminderId
);
entity_id!(
    /// Identifier of a [`PomodoroSession`](crate::model::PomodoroSession)
    SessionId
);
