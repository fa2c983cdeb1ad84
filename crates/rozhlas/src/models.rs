use std::sync::OnceLock;

use chrono::DateTime;
use chrono_tz::Tz;
use regex::Regex;

/// Pattern separating single-track player pages from everything else.
/// Anchored at the start; trailing path segments or query strings are
/// allowed, matching the original archive's link shapes.
const PLAYER_LINK_PATTERN: &str = r"^http(s)?://prehravac\.rozhlas\.cz/audio/(?P<id>\d+)";

fn player_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PLAYER_LINK_PATTERN).expect("player link pattern is valid"))
}

/// One playable audio episode extracted from the archive.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub title: String,
    /// Absolute URL for player pages, possibly page-relative for article
    /// playlists. Treated as an opaque string; also the feed entry identity.
    pub audio_url: String,
    /// Publish instant in the archive's civil timezone (Europe/Prague).
    pub published: DateTime<Tz>,
    /// Never extracted upstream; constant placeholder, not "unknown".
    pub duration_secs: u32,
}

/// What kind of detail page an archive-item link points at.
///
/// Resolved once per link by a pure string-pattern test; no network call is
/// made to decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// Single-track player page; `audio_id` is the numeric id captured from
    /// the URL (kept as a string, it is only substituted into the media URL
    /// template).
    Player { audio_id: String },
    /// Multi-track article page with an embedded playlist.
    Article,
}

impl LinkKind {
    pub fn classify(link: &str) -> LinkKind {
        match player_link_regex().captures(link) {
            Some(caps) => LinkKind::Player {
                audio_id: caps["id"].to_string(),
            },
            None => LinkKind::Article,
        }
    }
}
