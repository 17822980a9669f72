//! Candidate and configuration loading

use std::io::{self, BufRead};
use std::path::Path;

use milder_core::fuzzy::EngineConfig;

/// Read newline-separated candidates as raw bytes.
///
/// Trailing `\r` is stripped so CRLF input matches the same as LF input.
pub fn read_candidates(reader: impl io::Read) -> io::Result<Vec<Vec<u8>>> {
    let mut reader = io::BufReader::new(reader);
    let mut candidates = Vec::new();
    let mut line = Vec::new();

    while reader.read_until(b'\n', &mut line)? > 0 {
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        candidates.push(std::mem::take(&mut line));
    }
    Ok(candidates)
}

/// Load and validate an [`EngineConfig`] from a JSON file.
///
/// Missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let config: EngineConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}
