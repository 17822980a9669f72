//! Match rendering: plain text with optional scores and highlights, or JSON lines

use std::io::{self, Write};

use milder_core::fuzzy::{Matcher, ScoredEntry};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text { scores: bool, positions: bool },
    Json,
}

#[derive(Serialize)]
struct JsonMatch<'a> {
    index: usize,
    candidate: &'a str,
    score: f64,
    positions: Vec<usize>,
}

pub struct Printer<'a> {
    matcher: &'a Matcher,
    needle: &'a [u8],
    format: Format,
}

impl<'a> Printer<'a> {
    pub fn new(matcher: &'a Matcher, needle: &'a [u8], format: Format) -> Self {
        Self {
            matcher,
            needle,
            format,
        }
    }

    pub fn write_entry(
        &self,
        out: &mut impl Write,
        entry: &ScoredEntry,
        candidate: &[u8],
    ) -> io::Result<()> {
        match self.format {
            Format::Text { scores, positions } => {
                if scores {
                    write!(out, "{:.3}\t", entry.score)?;
                }
                if positions {
                    out.write_all(&highlight(candidate, &self.positions(candidate)))?;
                } else {
                    out.write_all(candidate)?;
                }
                writeln!(out)
            }
            Format::Json => {
                let positions = self.positions(candidate);
                let candidate = String::from_utf8_lossy(candidate);
                let line = JsonMatch {
                    index: entry.index,
                    candidate: &candidate,
                    score: entry.score,
                    positions,
                };
                serde_json::to_writer(&mut *out, &line)?;
                writeln!(out)
            }
        }
    }

    /// Positions for highlighting; candidates the tracer rejects get none.
    fn positions(&self, candidate: &[u8]) -> Vec<usize> {
        self.matcher
            .positions(self.needle, candidate)
            .unwrap_or_else(|err| {
                debug!("No positions for candidate: {}", err);
                Vec::new()
            })
    }
}

/// Wrap each run of matched bytes in `[` `]`.
fn highlight(candidate: &[u8], positions: &[usize]) -> Vec<u8> {
    let mut out = Vec::with_capacity(candidate.len() + 2 * positions.len());
    let mut matched = positions.iter().peekable();
    let mut open = false;

    for (i, &byte) in candidate.iter().enumerate() {
        let hit = matched.next_if(|&&p| p == i).is_some();
        if hit && !open {
            out.push(b'[');
            open = true;
        } else if !hit && open {
            out.push(b']');
            open = false;
        }
        out.push(byte);
    }
    if open {
        out.push(b']');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(format: Format, needle: &str, candidate: &str) -> String {
        let matcher = Matcher::new();
        let entries = matcher.filter_sort(needle, &[candidate]).unwrap();
        let printer = Printer::new(&matcher, needle.as_bytes(), format);
        let mut out = Vec::new();
        printer.write_entry(&mut out, &entries[0], candidate.as_bytes()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_highlight_runs() {
        assert_eq!(highlight(b"app/models", &[0, 4, 5]), b"[a]pp/[mo]dels".to_vec());
        assert_eq!(highlight(b"abc", &[1, 2]), b"a[bc]".to_vec());
        assert_eq!(highlight(b"abc", &[]), b"abc".to_vec());
    }

    #[test]
    fn test_plain_text() {
        let text = render(Format::Text { scores: false, positions: false }, "rb", "main.rb");
        assert_eq!(text, "main.rb\n");
    }

    #[test]
    fn test_text_with_scores_and_positions() {
        let text = render(Format::Text { scores: true, positions: true }, "rb", "main.rb");
        assert_eq!(text, "1.575\tmain.[rb]\n");
    }

    #[test]
    fn test_json_line() {
        let text = render(Format::Json, "amo", "app/models/user.rb");
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["index"], 0);
        assert_eq!(value["candidate"], "app/models/user.rb");
        assert_eq!(value["positions"], serde_json::json!([0, 4, 5]));
    }
}
