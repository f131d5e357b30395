// src/utils/input.rs

//! Line-oriented input lists (path file, domains on stdin).

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::error::{AppError, Result};

/// Read trimmed, non-empty lines from an async reader, keeping their order.
pub async fn read_lines<R>(reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut out = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if !line.is_empty() {
            out.push(line.to_string());
        }
    }
    Ok(out)
}

/// Load the ordered path list from a newline-delimited file.
pub async fn read_path_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .await
        .map_err(|e| AppError::input(path, e))?;
    read_lines(BufReader::new(file))
        .await
        .map_err(|e| AppError::input(path, e))
}

/// Read target domains from standard input until EOF.
pub async fn read_domains() -> Result<Vec<String>> {
    read_lines(BufReader::new(tokio::io::stdin()))
        .await
        .map_err(|e| AppError::input("<stdin>", e))
}
