//! REPL Module
//!
//! Reads commands one line at a time until end-of-input or EXIT.
//!
//! Command-level failures (parse errors, missing keys) are printed with an
//! `ERROR: ` prefix and the loop continues; they never terminate the
//! process. A mutation whose snapshot write failed prints the reply followed
//! by a `WARNING: ` line. Each iteration is synchronous: the next line is
//! not read until the current command, including any save, has completed.

use std::io::{BufRead, Write};

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::protocol::Command;

const PROMPT: &str = "> ";

/// Line-oriented read-evaluate-print loop over arbitrary streams
pub struct Repl<R, W> {
    input: R,
    output: W,
    prompt: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Build a REPL over the given streams, prompting before each line
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt: true,
        }
    }

    /// Enable or disable the `"> "` prompt (scripted input wants it off)
    pub fn prompt(mut self, on: bool) -> Self {
        self.prompt = on;
        self
    }

    /// Drive the dispatcher until EXIT or end-of-input.
    ///
    /// Returns `Err` only for I/O failures on the streams themselves; both
    /// terminal conditions are normal completion.
    pub fn run(&mut self, dispatcher: &mut Dispatcher) -> Result<()> {
        let mut line = String::new();
        loop {
            if self.prompt {
                write!(self.output, "{PROMPT}")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // End-of-input gets the same final flush as EXIT
                if let Some(warning) = dispatcher.finish() {
                    writeln!(self.output, "WARNING: {warning}")?;
                }
                return Ok(());
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "ERROR: {e}")?;
                    continue;
                }
            };

            match dispatcher.dispatch(command) {
                Ok(outcome) => {
                    if let Some(text) = outcome.reply.render() {
                        writeln!(self.output, "{text}")?;
                    }
                    if let Some(warning) = outcome.warning {
                        writeln!(self.output, "WARNING: {warning}")?;
                    }
                    if outcome.exit {
                        return Ok(());
                    }
                }
                Err(e) => {
                    writeln!(self.output, "ERROR: {e}")?;
                }
            }
        }
    }
}
