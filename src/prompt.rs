//! Interactive selection on stdin/stdout.
//!
//! Readers and writers are generic so the loops can be driven from tests.

use crate::models::PlaylistInfo;
use crate::queue::QueueLimit;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

/// Return the first playlist whose name matches exactly
pub fn find_playlist_by_name<'a>(
    playlists: &'a [PlaylistInfo],
    name: &str,
) -> Option<&'a PlaylistInfo> {
    playlists.iter().find(|playlist| playlist.name == name)
}

/// Print `question`, then read one trimmed line. End of input is an error.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input ended before a valid answer was given");
    }
    Ok(line.trim().to_string())
}

/// Let the user choose one of `playlists` by 1-based index or by exact name
pub fn prompt_for_playlist<'a, R: BufRead, W: Write>(
    playlists: &'a [PlaylistInfo],
    input: &mut R,
    output: &mut W,
) -> Result<&'a PlaylistInfo> {
    if playlists.is_empty() {
        bail!("No playlists available to choose from");
    }

    for (idx, playlist) in playlists.iter().enumerate() {
        writeln!(
            output,
            "Index {} | Name {} | # of Tracks {}",
            idx + 1,
            playlist.name,
            playlist.tracks.total
        )?;
    }

    let by_index = loop {
        match ask(input, output, "Select Playlist by Index or Name?\n1. Index\n2. Name\n")?.as_str() {
            "1" => break true,
            "2" => break false,
            _ => writeln!(output, "Invalid Input")?,
        }
    };

    if by_index {
        loop {
            let entry = ask(input, output, "Enter index: ")?;
            match entry.parse::<usize>() {
                Ok(idx) if (1..=playlists.len()).contains(&idx) => return Ok(&playlists[idx - 1]),
                _ => writeln!(output, "Invalid Index")?,
            }
        }
    }

    loop {
        let entry = ask(input, output, "Enter name: ")?;
        if let Some(playlist) = find_playlist_by_name(playlists, &entry) {
            return Ok(playlist);
        }
        writeln!(output, "Did not find name!")?;
    }
}

/// Ask for an optional queue limit. Anything but a positive integer means no limit.
pub fn prompt_for_queue_limit<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<QueueLimit> {
    let entry = ask(input, output, "Limit number of songs queued?\nEnter number or nothing\n")?;

    Ok(entry
        .parse::<NonZeroUsize>()
        .map(QueueLimit::Count)
        .unwrap_or(QueueLimit::Unlimited))
}
