//! Protocol Module
//!
//! Defines the line-oriented command grammar and the replies rendered back
//! to the user.
//!
//! ## Grammar (one command per line, verb is case-insensitive)
//!
//! ```text
//! PUT <key> <value...>    value is the remainder of the line, spaces allowed
//! GET <key>
//! DELETE <key>            DEL is accepted as an alias
//! LIST                    STORE is accepted as an alias
//! EXIT
//! ```
//!
//! Blank lines parse to a no-op the dispatcher silently ignores. Anything
//! else fails with a `Parse` error carrying the offending line and a reason.

mod command;
mod response;

pub use command::Command;
pub use response::Reply;
