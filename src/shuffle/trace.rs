use crate::models::Track;
use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;

pub const TRACE_HEADER: &str = "Recently Played | Song | Artist";
const NOT_RECENT: &str = "NA";
const UNKNOWN_ARTIST: &str = "Unknown";

/// One queued track as it appears in the trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub recency_rank: Option<u32>,
    pub track_name: String,
    pub primary_artist: Option<String>,
}

impl TraceLine {
    pub fn new(track: &Track, recency_rank: Option<u32>) -> Self {
        Self {
            recency_rank,
            track_name: track.name.clone(),
            primary_artist: track.primary_artist().map(str::to_owned),
        }
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.recency_rank {
            Some(rank) => write!(f, "{rank}")?,
            None => f.write_str(NOT_RECENT)?,
        }
        write!(
            f,
            " | {} | {}",
            self.track_name,
            self.primary_artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
        )
    }
}

/// Human-readable report of the final queue order. Not meant for parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueTrace {
    lines: Vec<TraceLine>,
}

impl QueueTrace {
    pub fn new(lines: Vec<TraceLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[TraceLine] {
        &self.lines
    }

    /// Write the report, replacing any previous file at `path`
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_string())
            .with_context(|| format!("Failed to write queue trace to {}", path.display()))
    }
}

impl fmt::Display for QueueTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TRACE_HEADER}")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Album, Artist};

    fn track(name: &str, artists: &[&str]) -> Track {
        Track {
            uri: format!("spotify:track:{name}"),
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|a| Artist { name: a.to_string() })
                .collect(),
            album: Album::default(),
        }
    }

    #[test]
    fn test_renders_header_and_lines() {
        let trace = QueueTrace::new(vec![
            TraceLine::new(&track("Song A", &["X", "Feat"]), Some(3)),
            TraceLine::new(&track("Song B", &["Y"]), None),
        ]);

        assert_eq!(
            trace.to_string(),
            "Recently Played | Song | Artist\n3 | Song A | X\nNA | Song B | Y\n"
        );
    }

    #[test]
    fn test_missing_artist_renders_unknown() {
        let line = TraceLine::new(&track("Episode", &[]), None);
        assert_eq!(line.to_string(), "NA | Episode | Unknown");
    }

    #[test]
    fn test_empty_trace_is_header_only() {
        assert_eq!(QueueTrace::default().to_string(), format!("{TRACE_HEADER}\n"));
    }

    #[test]
    fn test_write_to_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.log");
        std::fs::write(&path, "stale contents that are much longer than the trace\n").unwrap();

        let trace = QueueTrace::new(vec![TraceLine::new(&track("Song", &["Z"]), Some(1))]);
        trace.write_to_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Recently Played | Song | Artist\n1 | Song | Z\n");
    }
}
