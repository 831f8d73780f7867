use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

mod client;
mod config;
mod models;
mod prompt;
mod queue;
mod shuffle;

use crate::client::SpotifyClient;
use crate::config::load_config;
use crate::queue::{QueueLimit, select_for_queue};
use crate::shuffle::{ShuffleOptions, Shuffler};

#[derive(Parser)]
#[command(name = "queue-shuffler")]
#[command(about = "Shuffle a Spotify playlist into the play queue, pushing recently played tracks back")]
#[command(version)]
struct Args {
    /// Name of the playlist to queue (must match exactly). Prompts when omitted
    #[arg(short = 'p', long = "playlist")]
    playlist: Option<String>,

    /// Maximum number of songs to queue, or "inf" for no limit. Prompts when omitted
    #[arg(short = 'l', long = "limit")]
    limit: Option<QueueLimit>,

    /// Avoid playing the same artist twice in a row
    #[arg(long = "no-double-artist")]
    no_double_artist: bool,

    /// Avoid playing the same album twice in a row (ignored with --no-double-artist)
    #[arg(long = "no-double-album")]
    no_double_album: bool,

    /// Queue the playlist in its stored order
    #[arg(long = "no-shuffle")]
    no_shuffle: bool,

    /// Skip this many songs at the start of the queue
    #[arg(short = 'o', long = "offset", default_value_t = 0)]
    offset: usize,

    /// Write the shuffled queue with recency ranks to the trace file
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Where --debug writes the queue trace
    #[arg(long = "trace-file", default_value = "queue.log")]
    trace_file: PathBuf,

    /// Seed for a reproducible shuffle
    #[arg(long = "seed")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration from .env
    let config = load_config()?;
    let client = SpotifyClient::new(config);

    let history = client
        .recently_played()
        .context("Failed to fetch recently played tracks")?;
    debug!("Loaded {} recently played tracks", history.len());

    let playlists = client.playlists().context("Failed to fetch playlists")?;
    debug!("Loaded {} playlists", playlists.len());

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let playlist = match &args.playlist {
        Some(name) => prompt::find_playlist_by_name(&playlists, name).with_context(|| {
            format!("Failed to find playlist with name '{name}'. The name must match exactly")
        })?,
        None => prompt::prompt_for_playlist(&playlists, &mut input, &mut output)?,
    };

    let limit = match args.limit {
        Some(limit) => limit,
        None => prompt::prompt_for_queue_limit(&mut input, &mut output)?,
    };

    println!("Getting Tracks from Playlist...");
    let tracks = client
        .playlist_tracks(playlist)
        .with_context(|| format!("Failed to fetch tracks of '{}'", playlist.name))?;
    println!("Done! '{}' has {} tracks", playlist.name, tracks.len());

    let ordered = if args.no_shuffle {
        tracks
    } else {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let shuffler = Shuffler::new(ShuffleOptions {
            avoid_repeat_artist: args.no_double_artist,
            avoid_repeat_album: args.no_double_album,
            emit_trace: args.debug,
        });

        let outcome = shuffler.shuffle(tracks, &history, &mut rng);

        if let Some(trace) = &outcome.trace {
            trace.write_to_file(&args.trace_file)?;
            println!(
                "Wrote trace of {} tracks to {}",
                trace.lines().len(),
                args.trace_file.display()
            );
        }

        outcome.tracks
    };

    let queue = select_for_queue(ordered, args.offset, limit);
    info!("Queueing {} tracks (offset {}, {limit})", queue.len(), args.offset);

    println!("Queueing songs...");
    for track in &queue {
        client.add_to_queue(&track.uri).with_context(|| {
            format!(
                "Failed to queue '{}'. Please make sure a device is actively playing",
                track.name
            )
        })?;
    }

    println!("Done! Queued {} songs.", queue.len());
    Ok(())
}
