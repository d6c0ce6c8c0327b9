//! The transient error event captured per report.

use serde::{Deserialize, Serialize};

/// One key/value tag attached to an error event.
///
/// Tags are ordered and duplicate keys are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A captured application error, enriched and dispatched by the client.
///
/// `message` doubles as the deduplication key: exact string match, no
/// normalization. The empty string is a valid key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorEvent {
    pub message: String,
    /// Free-text stack trace. Replaced by a sentinel on the wire when absent.
    pub stack_trace: Option<String>,
    /// Identifier of the user affected by the error.
    pub user_affected: Option<String>,
    /// Raw user-agent string of the host, when known.
    pub user_agent: Option<String>,
    /// Caller-supplied tags, in insertion order.
    pub tags: Vec<Tag>,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Build an event from any [`std::error::Error`], flattening its
    /// `source()` chain into a pseudo stack trace.
    pub fn from_error(error: &dyn std::error::Error, message: impl Into<String>) -> Self {
        let mut lines = vec![error.to_string()];
        let mut source = error.source();
        while let Some(cause) = source {
            lines.push(format!("  caused by: {cause}"));
            source = cause.source();
        }
        Self {
            message: message.into(),
            stack_trace: Some(lines.join("\n")),
            ..Self::default()
        }
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    pub fn with_user_affected(mut self, user: impl Into<String>) -> Self {
        self.user_affected = Some(user.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }
}
