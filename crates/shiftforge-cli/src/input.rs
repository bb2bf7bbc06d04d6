//! Flat schedule sequences on the command line.
//!
//! One schedule per line, shift indices separated by commas and/or
//! whitespace. Blank lines and lines starting with `#` are skipped.

use std::io::{self, Read};
use std::path::Path;

use crate::commands::CliError;

/// Reads a file, or all of stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Parses every schedule line of `text`.
pub fn parse_schedules(text: &str) -> Result<Vec<Vec<usize>>, CliError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| parse_line(number, line))
        .collect()
}

fn parse_line(number: usize, line: &str) -> Result<Vec<usize>, CliError> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse().map_err(|_| CliError::Parse {
                line: number,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Formats a flat sequence the way [`parse_schedules`] reads it.
pub fn format_schedule(cells: &[usize]) -> String {
    cells
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
