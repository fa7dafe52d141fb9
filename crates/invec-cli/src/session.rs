//! The blocking read/dispatch/write loop behind the menu protocol.

use std::io::{BufRead, Write};

use invec_core::InlineVec;

use crate::Result;
use crate::menu::{self, Choice};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user chose `5. Exit`.
    Exited,
    /// The input stream reached end of file before an exit choice. This is
    /// the normal path when the owning process closes stdin.
    InputClosed,
}

/// Drives the menu protocol over `input`/`output` until exit or end of input.
///
/// The vector is owned by the loop and lives exactly as long as the session.
/// Pending output is flushed before every blocking read: the peer reads the
/// protocol line by line over a pipe and would otherwise wait forever on
/// bytes still sitting in the write buffer.
pub fn run_session<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Outcome> {
    let mut vector: InlineVec = InlineVec::new();

    loop {
        for line in menu::MENU {
            writeln!(output, "{line}")?;
        }
        let Some(line) = read_line(&mut input, &mut output)? else {
            return Ok(Outcome::InputClosed);
        };

        match Choice::parse(&line) {
            Some(Choice::Add) => {
                writeln!(output, "{}", menu::PROMPT_VALUE)?;
                let Some(raw) = read_line(&mut input, &mut output)? else {
                    return Ok(Outcome::InputClosed);
                };
                match raw.trim().parse::<i64>() {
                    Ok(value) => {
                        vector.push(value);
                        writeln!(output, "{}", menu::VALUE_ADDED)?;
                    }
                    Err(_) => {
                        writeln!(output, "{}", menu::INVALID_VALUE)?;
                    }
                }
            }
            Some(Choice::RemoveLast) => match vector.pop() {
                Some(_) => writeln!(output, "{}", menu::LAST_VALUE_REMOVED)?,
                None => writeln!(output, "{}", menu::VECTOR_IS_EMPTY)?,
            },
            Some(Choice::PrintStats) => {
                writeln!(output, "Size: {}", vector.len())?;
                writeln!(output, "Capacity: {}", vector.capacity())?;
            }
            Some(Choice::PrintVector) => {
                if vector.is_empty() {
                    writeln!(output, "{}", menu::VECTOR_IS_EMPTY)?;
                } else {
                    writeln!(output, "{}", menu::VECTOR_CONTENTS)?;
                    let rendered: Vec<String> = vector.iter().map(i64::to_string).collect();
                    writeln!(output, "{}", rendered.join(" "))?;
                }
            }
            Some(Choice::Exit) => {
                writeln!(output, "{}", menu::EXITING)?;
                output.flush()?;
                return Ok(Outcome::Exited);
            }
            None => {
                writeln!(output, "{}", menu::INVALID_CHOICE)?;
            }
        }
    }
}

/// Reads one line, flushing pending output first. `None` means end of input.
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<String>> {
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
