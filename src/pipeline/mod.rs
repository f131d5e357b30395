//! Pipeline entry points.
//!
//! - `run_scanner`: probe every domain against the path list
//! - `write_summary`: dump aggregated per-path counts

pub mod scan;
pub mod summary;

pub use scan::{run_scan, run_scanner};
pub use summary::{render_summary, write_summary};
