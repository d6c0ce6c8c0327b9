//! Pure enrichment parsers: user-agent breakdown and stack-frame extraction.
//!
//! Both are stateless string-in/struct-out functions; the client decides
//! when (and whether) to apply them.

pub mod stack;
pub mod user_agent;

pub use stack::{parse_first_frame, StackFrame};
pub use user_agent::{opinionated_tags, parse_user_agent, UserAgentInfo};
