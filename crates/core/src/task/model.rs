//! Task model definitions

use serde::Serialize;
use serde_json::Value;

/// A persisted to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub done: bool,
}

impl Task {
    /// Flip the completion flag
    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    /// Replace the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// Input for creating a task; the store assigns the id and clears `done`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub content: String,
}

impl NewTask {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Interpret the `done` field of a bulk update.
///
/// Only the text `true` (any casing) or the JSON boolean `true` mean done;
/// everything else, including malformed values, means not done.
pub fn parse_done_flag(value: &Value) -> bool {
    match value {
        Value::String(raw) => raw.to_lowercase() == "true",
        Value::Bool(flag) => *flag,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Task {
        Task {
            id: 1,
            name: "A".to_string(),
            content: "B".to_string(),
            done: false,
        }
    }

    #[test]
    fn test_toggle_done_twice_restores() {
        let mut task = sample();
        task.toggle_done();
        assert!(task.done);
        task.toggle_done();
        assert!(!task.done);
    }

    #[test]
    fn test_with_name_and_content() {
        let task = sample().with_name("renamed").with_content("rewritten");
        assert_eq!(task.name, "renamed");
        assert_eq!(task.content, "rewritten");
        assert_eq!(task.id, 1);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "A", "content": "B", "done": false})
        );
    }

    #[test]
    fn test_parse_done_flag() {
        assert!(parse_done_flag(&json!("true")));
        assert!(parse_done_flag(&json!("TrUe")));
        assert!(parse_done_flag(&json!(true)));

        assert!(!parse_done_flag(&json!("false")));
        assert!(!parse_done_flag(&json!(" true")));
        assert!(!parse_done_flag(&json!("yes")));
        assert!(!parse_done_flag(&json!(1)));
        assert!(!parse_done_flag(&json!(false)));
        assert!(!parse_done_flag(&Value::Null));
    }
}
