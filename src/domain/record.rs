// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// One training example in chat-message form:
//
//   {"messages": [
//       {"role": "user",      "content": "<context lines>"},
//       {"role": "assistant", "content": "<completion lines>"}
//   ]}
//
// The user turn carries the context window, the assistant
// turn carries the completion window that follows it.
// Field order and role strings are part of the output format
// consumed by downstream fine-tuning tools.

use serde::{Deserialize, Serialize};

/// Speaker of a message. Serialised in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role:    Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// A (prompt, completion) pair.
///
/// The fixed-size array makes "exactly two entries" part of
/// the type: index 0 is always the user turn, index 1 the
/// assistant turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub messages: [Message; 2],
}

impl Record {
    /// Build a record from already-stripped prompt and completion text
    pub fn new(prompt: impl Into<String>, completion: impl Into<String>) -> Self {
        Self {
            messages: [
                Message::new(Role::User, prompt),
                Message::new(Role::Assistant, completion),
            ],
        }
    }
}

#[cfg(test)]
impl Record {
    /// The context text shown to the model
    pub fn prompt(&self) -> &str {
        &self.messages[0].content
    }

    /// The text the model should produce
    pub fn completion(&self) -> &str {
        &self.messages[1].content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_and_field_order() {
        let r    = Record::new("module top;", "endmodule");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"messages":[{"role":"user","content":"module top;"},{"role":"assistant","content":"endmodule"}]}"#
        );
    }

    #[test]
    fn test_accessors() {
        let r = Record::new("a", "b");
        assert_eq!(r.prompt(), "a");
        assert_eq!(r.completion(), "b");
        assert_eq!(r.messages[0].role, Role::User);
        assert_eq!(r.messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_parse_back_is_field_for_field_equal() {
        let r      = Record::new("wire [7:0] data;\nreg  q;", "assign q = data[0];");
        let json   = serde_json::to_string(&r).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);
    }

    #[test]
    fn test_rejects_three_messages() {
        let json = r#"{"messages":[
            {"role":"user","content":"a"},
            {"role":"assistant","content":"b"},
            {"role":"user","content":"c"}]}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
