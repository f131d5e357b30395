// src/pipeline/summary.rs

//! Summary dump of the aggregated path counts.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{AppError, Result};

/// Render counts as `<escaped-path> [count: <N>]` lines.
pub fn render_summary(counts: &BTreeMap<String, usize>) -> String {
    counts
        .iter()
        .map(|(path, count)| format!("{path} [count: {count}]\n"))
        .collect()
}

/// Write the summary file. A `.json` extension selects a JSON object.
pub async fn write_summary(path: &Path, counts: &BTreeMap<String, usize>) -> Result<()> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let content = if is_json {
        serde_json::to_string_pretty(counts)?
    } else {
        render_summary(counts)
    };

    tokio::fs::write(path, content)
        .await
        .map_err(|e| AppError::output(path, e))?;

    log::info!("Summary of {} paths written to {}", counts.len(), path.display());
    Ok(())
}
