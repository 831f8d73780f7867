use crate::models::Track;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Maximum number of tracks to submit to the play queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueLimit {
    Unlimited,
    Count(NonZeroUsize),
}

impl QueueLimit {
    fn max_tracks(self) -> usize {
        match self {
            QueueLimit::Unlimited => usize::MAX,
            QueueLimit::Count(count) => count.get(),
        }
    }
}

impl FromStr for QueueLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("inf") {
            return Ok(QueueLimit::Unlimited);
        }

        s.parse::<NonZeroUsize>().map(QueueLimit::Count).map_err(|_| {
            format!("queue limit must be a positive integer, or 'inf' for no limit (got '{s}')")
        })
    }
}

impl fmt::Display for QueueLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueLimit::Unlimited => f.write_str("no limit"),
            QueueLimit::Count(count) => write!(f, "{count} tracks"),
        }
    }
}

/// Skip the first `offset` tracks, then keep at most `limit` of the rest
pub fn select_for_queue(tracks: Vec<Track>, offset: usize, limit: QueueLimit) -> Vec<Track> {
    tracks
        .into_iter()
        .skip(offset)
        .take(limit.max_tracks())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Album;

    fn tracks(count: usize) -> Vec<Track> {
        (0..count)
            .map(|i| Track {
                uri: format!("spotify:track:{i}"),
                name: i.to_string(),
                artists: Vec::new(),
                album: Album::default(),
            })
            .collect()
    }

    fn names(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.name.as_str()).collect()
    }

    fn count(n: usize) -> QueueLimit {
        QueueLimit::Count(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn test_parse_queue_limit() {
        assert_eq!("inf".parse::<QueueLimit>(), Ok(QueueLimit::Unlimited));
        assert_eq!("INF".parse::<QueueLimit>(), Ok(QueueLimit::Unlimited));
        assert_eq!("20".parse::<QueueLimit>(), Ok(count(20)));
        assert_eq!(" 3 ".parse::<QueueLimit>(), Ok(count(3)));
    }

    #[test]
    fn test_parse_queue_limit_rejects_non_positive_and_garbage() {
        assert!("0".parse::<QueueLimit>().is_err());
        assert!("-4".parse::<QueueLimit>().is_err());
        assert!("lots".parse::<QueueLimit>().is_err());
        assert!("".parse::<QueueLimit>().is_err());
    }

    #[test]
    fn test_select_applies_offset_then_limit() {
        let selected = select_for_queue(tracks(6), 2, count(3));
        assert_eq!(names(&selected), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_select_unlimited_keeps_everything_after_offset() {
        let selected = select_for_queue(tracks(4), 1, QueueLimit::Unlimited);
        assert_eq!(names(&selected), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_select_offset_past_end_is_empty() {
        assert!(select_for_queue(tracks(3), 10, QueueLimit::Unlimited).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(QueueLimit::Unlimited.to_string(), "no limit");
        assert_eq!(count(5).to_string(), "5 tracks");
    }
}
