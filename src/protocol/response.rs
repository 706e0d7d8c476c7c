//! Reply definitions
//!
//! Human-readable results rendered back to the user, one reply per command.

use std::fmt::Write as _;

/// The outcome of a successfully dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Value fetched by GET
    Value(String),

    /// PUT applied; echoes the stored value
    Stored { key: String, value: String },

    /// DELETE applied
    Deleted { key: String },

    /// LIST over a non-empty store, pairs in sorted key order
    Listing(Vec<(String, String)>),

    /// LIST over an empty store
    EmptyStore,

    /// EXIT acknowledged
    Bye,

    /// Blank input line; prints nothing
    None,
}

impl Reply {
    /// Render the reply as display text, or `None` for silent replies.
    ///
    /// Multi-line output (LIST) carries embedded newlines; the caller writes
    /// one trailing newline per reply.
    pub fn render(&self) -> Option<String> {
        match self {
            Reply::Value(value) => Some(value.clone()),
            Reply::Stored { key, value } => Some(format!("OK {key} = {value}")),
            Reply::Deleted { key } => Some(format!("DELETED {key}")),
            Reply::Listing(pairs) => {
                let mut out = String::new();
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    let _ = write!(out, "{key} = {value}");
                }
                Some(out)
            }
            Reply::EmptyStore => Some("(store is empty)".to_string()),
            Reply::Bye => Some("bye".to_string()),
            Reply::None => None,
        }
    }
}
