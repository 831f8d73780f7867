use crate::config::Config;
use crate::models::{
    Page, PlaylistInfo, PlaylistItem, RecentlyPlayedResponse, Track,
};
use anyhow::{Context, Result, anyhow};
use log::debug;
use serde::de::DeserializeOwned;
use ureq::{Agent, Request};
use urlencoding::encode;

const RECENTLY_PLAYED_LIMIT: u32 = 50;
const PLAYLISTS_PAGE_SIZE: u32 = 50;
const PLAYLIST_TRACKS_PAGE_SIZE: u32 = 100;

/// A minimal Spotify Web API client authenticated with a bearer token
pub struct SpotifyClient {
    agent: Agent,
    base_url: String,
    access_token: String,
}

impl SpotifyClient {
    /// Create a new client with configuration from environment
    pub fn new(config: Config) -> Self {
        let agent = Agent::new();

        SpotifyClient {
            agent,
            base_url: config.api_base_url,
            access_token: config.access_token,
        }
    }

    fn authorized(&self, request: Request) -> Request {
        request.set("Authorization", &format!("Bearer {}", self.access_token))
    }

    /// GET an endpoint and decode the JSON body
    fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!("GET {url}");

        let response = self
            .authorized(self.agent.get(&url))
            .call()
            .map_err(|e| request_error(path_and_query, e))?;

        let response_text = response.into_string()?;

        serde_json::from_str(&response_text)
            .with_context(|| format!("Failed to parse JSON response from {path_and_query}"))
    }

    /// Fetch the listening history, most recently played first
    pub fn recently_played(&self) -> Result<Vec<Track>> {
        let response: RecentlyPlayedResponse = self.get_json(&format!(
            "/me/player/recently-played?limit={RECENTLY_PLAYED_LIMIT}"
        ))?;

        if let Some(latest) = response.items.first() {
            debug!(
                "Most recent play: '{}' at {}",
                latest.track.name,
                latest.played_at.to_rfc3339()
            );
        }

        Ok(response.items.into_iter().map(|item| item.track).collect())
    }

    /// Get all playlists owned or followed by the current user
    pub fn playlists(&self) -> Result<Vec<PlaylistInfo>> {
        collect_pages(PLAYLISTS_PAGE_SIZE, |offset| {
            let page: Page<PlaylistInfo> = self.get_json(&format!(
                "/me/playlists?limit={PLAYLISTS_PAGE_SIZE}&offset={offset}"
            ))?;
            Ok(page.items)
        })
    }

    /// Get every track of a playlist, skipping items without a playable track
    pub fn playlist_tracks(&self, playlist: &PlaylistInfo) -> Result<Vec<Track>> {
        let items = collect_pages(PLAYLIST_TRACKS_PAGE_SIZE, |offset| {
            let page: Page<PlaylistItem> = self.get_json(&format!(
                "/playlists/{}/tracks?limit={PLAYLIST_TRACKS_PAGE_SIZE}&offset={offset}",
                encode(&playlist.id)
            ))?;
            Ok(page.items)
        })?;

        let fetched = items.len();
        let tracks: Vec<Track> = items.into_iter().filter_map(|item| item.track).collect();
        if tracks.len() < fetched {
            debug!(
                "Dropped {} playlist items without a track",
                fetched - tracks.len()
            );
        }

        Ok(tracks)
    }

    /// Append a track to the end of the active device's play queue
    pub fn add_to_queue(&self, uri: &str) -> Result<()> {
        let path = format!("/me/player/queue?uri={}", encode(uri));
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url}");

        self.authorized(self.agent.post(&url))
            .send_string("")
            .map_err(|e| request_error(&path, e))?;

        Ok(())
    }
}

fn request_error(endpoint: &str, error: ureq::Error) -> anyhow::Error {
    match error {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            anyhow!("{endpoint} returned HTTP {code}: {body}")
        }
        ureq::Error::Transport(transport) => anyhow!("{endpoint} request failed: {transport}"),
    }
}

/// Accumulate an offset-paginated listing.
///
/// Pages are requested at offsets 0, `page_size`, 2 * `page_size`, ... until a page
/// comes back empty or shorter than `page_size`.
pub fn collect_pages<T, F>(page_size: u32, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Result<Vec<T>>,
{
    let mut all_items = Vec::new();
    let mut offset = 0;

    loop {
        let page = fetch_page(offset)?;
        if page.is_empty() {
            break;
        }

        let short_page = page.len() < page_size as usize;
        all_items.extend(page);

        if short_page {
            break;
        }

        offset += page_size;
    }

    Ok(all_items)
}
