use crate::models::Track;

/// Options controlling a single shuffle run
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuffleOptions {
    pub avoid_repeat_artist: bool,
    pub avoid_repeat_album: bool,
    pub emit_trace: bool,
}

/// Which neighbouring tracks count as repeats during adjacency repair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjacencyRule {
    PrimaryArtist,
    Album,
}

impl ShuffleOptions {
    /// The repair rule to run, if any. Artist repair wins when both are requested.
    pub fn adjacency_rule(&self) -> Option<AdjacencyRule> {
        if self.avoid_repeat_artist {
            Some(AdjacencyRule::PrimaryArtist)
        } else if self.avoid_repeat_album {
            Some(AdjacencyRule::Album)
        } else {
            None
        }
    }
}

impl AdjacencyRule {
    pub fn key<'a>(&self, track: &'a Track) -> Option<&'a str> {
        match self {
            AdjacencyRule::PrimaryArtist => track.primary_artist(),
            AdjacencyRule::Album => Some(track.album_name()),
        }
    }
}
