use super::ShuffleOptions;
use super::random::RandomSource;
use super::ranker::Ranker;
use super::trace::QueueTrace;
use crate::models::Track;
use log::debug;

/// Result of shuffling a playlist
#[derive(Debug)]
pub struct ShuffleOutcome {
    pub tracks: Vec<Track>,
    /// Present only when tracing was requested
    pub trace: Option<QueueTrace>,
}

/// Main queue shuffler
pub struct Shuffler {
    options: ShuffleOptions,
}

impl Shuffler {
    pub fn new(options: ShuffleOptions) -> Self {
        Self { options }
    }

    /// Rank `tracks` against the play history, then optionally break up repeats
    pub fn shuffle<R>(&self, tracks: Vec<Track>, history: &[Track], rng: &mut R) -> ShuffleOutcome
    where
        R: RandomSource + ?Sized,
    {
        let mut ranked = Ranker::rank(tracks, history, rng);

        if let Some(rule) = self.options.adjacency_rule().filter(|_| !ranked.is_empty()) {
            let summary = ranked.repair_adjacency(rule);
            debug!(
                "{:?} repair over {} tracks: {} swaps, {} repeats left",
                rule,
                ranked.len(),
                summary.swaps,
                summary.unresolved
            );
        }

        let trace = self.options.emit_trace.then(|| ranked.trace());

        ShuffleOutcome {
            tracks: ranked.into_tracks(),
            trace,
        }
    }
}
