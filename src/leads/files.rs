use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Extensions offered by the upload picker; dropped files are not filtered
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    ".stl", ".step", ".stp", ".iges", ".igs", ".3mf", ".obj", ".pdf",
];

/// Advertised upload ceiling, bytes
pub const MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

/// File reference attached to a lead (content travels separately)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFile {
    pub name: String,
    pub size: u64,
}

/// Human-readable size: bytes below 1 KB, then KB and MB with one decimal
pub fn bytes_to_nice(n: u64) -> String {
    if n < 1024 {
        format!("{} B", n)
    } else if n < 1_048_576 {
        format!("{:.1} KB", n as f64 / 1024.0)
    } else {
        format!("{:.1} MB", n as f64 / 1_048_576.0)
    }
}

/// Append incoming files, skipping `(name, size)` repeats
pub fn merge_files(existing: &[LeadFile], incoming: &[LeadFile]) -> Vec<LeadFile> {
    let mut seen: HashSet<(String, u64)> = existing
        .iter()
        .map(|f| (f.name.clone(), f.size))
        .collect();

    let mut merged = existing.to_vec();
    for file in incoming {
        if seen.insert((file.name.clone(), file.size)) {
            merged.push(file.clone());
        } else {
            debug!(file = %file.name, size = file.size, "Skipping repeated file");
        }
    }
    merged
}
