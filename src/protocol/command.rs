//! Command definitions and line parsing

use crate::error::{KvError, Result};

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get a value by key
    Get { key: String },

    /// Put a key-value pair (value may contain spaces)
    Put { key: String, value: String },

    /// Delete a key
    Delete { key: String },

    /// List all entries
    List,

    /// Terminate the session
    Exit,

    /// Blank input line; dispatched silently, triggers nothing
    Noop,
}

impl Command {
    /// Parse one raw input line into a command.
    ///
    /// The verb is matched case-insensitively. For `PUT`, the value is the
    /// untrimmed remainder of the line after the key, so embedded spaces
    /// survive. Single-key commands reject trailing input rather than
    /// silently folding it into the key.
    pub fn parse(line: &str) -> Result<Command> {
        let input = line.trim();
        if input.is_empty() {
            return Ok(Command::Noop);
        }

        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (input, ""),
        };

        match verb.to_ascii_uppercase().as_str() {
            "PUT" => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| KvError::parse(input, "PUT requires a key and a value"))?;
                Ok(Command::Put {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
            "GET" => Ok(Command::Get {
                key: single_key(input, "GET", rest)?,
            }),
            "DELETE" | "DEL" => Ok(Command::Delete {
                key: single_key(input, "DELETE", rest)?,
            }),
            "LIST" | "STORE" => {
                no_args(input, "LIST", rest)?;
                Ok(Command::List)
            }
            "EXIT" => {
                no_args(input, "EXIT", rest)?;
                Ok(Command::Exit)
            }
            _ => Err(KvError::parse(input, format!("unknown command '{verb}'"))),
        }
    }
}

/// Extract the single `<key>` argument, rejecting missing or trailing input
fn single_key(input: &str, verb: &str, rest: &str) -> Result<String> {
    if rest.is_empty() {
        return Err(KvError::parse(input, format!("{verb} requires a key")));
    }
    if rest.split_whitespace().count() > 1 {
        return Err(KvError::parse(
            input,
            format!("{verb} takes exactly one key"),
        ));
    }
    Ok(rest.to_string())
}

fn no_args(input: &str, verb: &str, rest: &str) -> Result<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(KvError::parse(input, format!("{verb} takes no arguments")))
    }
}
