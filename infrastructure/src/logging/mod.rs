//! Logging infrastructure: run transcripts.
//!
//! Provides [`JsonlConversationLogger`], a JSONL file writer that implements
//! the [`ConversationLogger`](pecko_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::{JsonlConversationLogger, TRANSCRIPT_SUFFIX};
