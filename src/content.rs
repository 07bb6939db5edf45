//! Page content loading.

use std::io::{IsTerminal, Read};
use std::path::Path;

use crate::error::{PagerError, Result};

/// Columns a tab expands to.
const TAB_WIDTH: usize = 4;

/// Read page rows from `path`, or from stdin when `path` is `None` or `-`.
pub fn load(path: Option<&Path>) -> Result<Vec<String>> {
    let text = match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).map_err(|source| PagerError::Read {
                path: p.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(PagerError::NoContent);
            }
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };
    tracing::debug!(bytes = text.len(), "content loaded");
    Ok(to_rows(&text))
}

/// Split text into display rows: tabs expanded, control characters dropped.
pub fn to_rows(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            let mut row = String::with_capacity(line.len());
            for c in line.chars() {
                match c {
                    '\t' => {
                        let pad = TAB_WIDTH - row.chars().count() % TAB_WIDTH;
                        row.extend(std::iter::repeat(' ').take(pad));
                    }
                    c if c.is_control() => {}
                    c => row.push(c),
                }
            }
            row
        })
        .collect()
}
