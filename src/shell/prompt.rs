//! # Line Prompts
//!
//! Line-based prompts over any reader/writer pair. End of input is reported
//! as `Ok(None)` so callers can stop cleanly.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Prints `prompt` (no newline) and reads one line.
///
/// Returns the line without its line ending, or `Ok(None)` at end of input.
/// Invalid UTF-8 is decoded lossily.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush output")?;

    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompts until `parse` accepts the input.
///
/// `prompt` is shown first; after a rejection, `retry` is called with the
/// error and must return the text to show before reading again.
pub fn read_until_valid<R, W, T, E, P, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    mut parse: P,
    mut retry: F,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    P: FnMut(&str) -> Result<T, E>,
    F: FnMut(&E) -> String,
{
    let mut current = prompt.to_string();
    loop {
        let Some(line) = read_line(input, output, &current)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => current = retry(&err),
        }
    }
}
