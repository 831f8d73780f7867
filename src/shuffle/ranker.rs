//! Weighted-random ranking of a playlist.
//!
//! Every track gets `score = recency_penalty + U(0, 1000)`, and the queue is the
//! stable descending sort by score. The recency penalty is
//! `-max(0, 250 * tanh(5 / rank) - U(0, 100))` for tracks found in the play history
//! (rank 1 = most recently played) and 0 for everything else.

use super::adjacency::{RepairSummary, repair_adjacency};
use super::config::AdjacencyRule;
use super::random::RandomSource;
use super::trace::{QueueTrace, TraceLine};
use crate::models::Track;
use log::{debug, trace, warn};

const PENALTY_SCALE: f64 = 250.0;
const PENALTY_STEEPNESS: f64 = 5.0;
const PENALTY_NOISE_MAX: i64 = 100;
const RANDOM_TERM_MAX: i64 = 1000;

/// Working record for one track during a single ranking
#[derive(Debug, Clone)]
pub(crate) struct QueueEntry {
    pub(crate) track: Track,
    pub(crate) score: i64,
    pub(crate) recency_rank: Option<u32>,
}

/// Tracks in ranked order together with their resolved recency ranks
#[derive(Debug, Clone)]
pub struct RankedQueue {
    entries: Vec<QueueEntry>,
}

/// Scores and orders tracks
pub struct Ranker;

impl Ranker {
    /// Rank `tracks` against the play history (most recent first).
    ///
    /// The result holds exactly the input tracks. Equal scores keep their input order.
    pub fn rank<R>(tracks: Vec<Track>, history: &[Track], rng: &mut R) -> RankedQueue
    where
        R: RandomSource + ?Sized,
    {
        let mut entries: Vec<QueueEntry> = tracks
            .into_iter()
            .map(|track| QueueEntry {
                track,
                score: 0,
                recency_rank: None,
            })
            .collect();

        Self::assign_recency_ranks(&mut entries, history);

        for entry in entries.iter_mut() {
            let penalty = Self::recency_penalty(entry.recency_rank, rng);
            let random_term = rng.uniform_inclusive(0, RANDOM_TERM_MAX);
            entry.score = penalty.round() as i64 + random_term;
            trace!(
                "{} (recent: {:?}) penalty {:.1} random {} -> {}",
                entry.track.uri, entry.recency_rank, penalty, random_term, entry.score
            );
        }

        // Vec::sort_by is stable, ties keep input order
        entries.sort_by(|a, b| b.score.cmp(&a.score));

        RankedQueue { entries }
    }

    /// Mark each history track on the first queue entry with the same URI.
    ///
    /// A track played more than once keeps the rank of its oldest occurrence, since
    /// later history positions overwrite earlier ones.
    pub(crate) fn assign_recency_ranks(entries: &mut [QueueEntry], history: &[Track]) {
        let mut matched = 0;

        for (index, played) in history.iter().enumerate() {
            if let Some(entry) = entries.iter_mut().find(|e| e.track.uri == played.uri) {
                entry.recency_rank = Some(index as u32 + 1);
                matched += 1;
            }
        }

        if matched > 0 {
            debug!("Matched {matched} of {} history entries to the queue", history.len());
        }
    }

    /// Score adjustment for a track's position in the play history. Never positive.
    ///
    /// Consumes one noise draw for ranked tracks and nothing otherwise.
    pub(crate) fn recency_penalty<R>(recency_rank: Option<u32>, rng: &mut R) -> f64
    where
        R: RandomSource + ?Sized,
    {
        let Some(rank) = recency_rank else {
            return 0.0;
        };

        if rank == 0 {
            warn!("Recency rank should never be 0, ignoring the recency penalty");
            return 0.0;
        }

        let noise = rng.uniform_inclusive(0, PENALTY_NOISE_MAX);
        let bias = PENALTY_SCALE * (PENALTY_STEEPNESS / rank as f64).tanh() - noise as f64;

        -bias.max(0.0)
    }
}

impl RankedQueue {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one adjacency repair pass over the ranked order
    pub fn repair_adjacency(&mut self, rule: AdjacencyRule) -> RepairSummary {
        repair_adjacency(&mut self.entries, |entry| {
            rule.key(&entry.track).map(str::to_owned)
        })
    }

    /// Read-only view of the current order and each track's recency rank
    pub fn trace(&self) -> QueueTrace {
        QueueTrace::new(
            self.entries
                .iter()
                .map(|entry| TraceLine::new(&entry.track, entry.recency_rank))
                .collect(),
        )
    }

    pub fn into_tracks(self) -> Vec<Track> {
        self.entries.into_iter().map(|entry| entry.track).collect()
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }
}
