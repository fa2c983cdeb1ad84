//! Timestamp normalization for the two textual layouts the archive uses.
//!
//! Both layouts are naive wall-clock times; they are resolved in the
//! archive's civil timezone (Europe/Prague), so standard and daylight-saving
//! offsets come out right without a fixed UTC offset.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Europe::Prague;
use chrono_tz::Tz;

use crate::error::RozhlasError;
use crate::Result;

/// Sentinel the article extractor substitutes when the published-time meta
/// attribute is absent. Parses to the epoch wall clock, marking "unknown
/// publish time" rather than a real value.
pub const UNKNOWN_PUBLISHED: &str = "1970-01-01T00:00:00";

/// Which textual layout a raw timestamp is expected to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// Parenthesized day-first caption on player pages: `(DD.MM.YYYY HH:MM)`.
    PlayerCaption,
    /// ISO-8601 date-time without offset in article metadata:
    /// `YYYY-MM-DDTHH:MM:SS`.
    ArticleMeta,
}

impl TimeLayout {
    fn format(self) -> &'static str {
        match self {
            TimeLayout::PlayerCaption => "(%d.%m.%Y %H:%M)",
            TimeLayout::ArticleMeta => "%Y-%m-%dT%H:%M:%S",
        }
    }

    fn name(self) -> &'static str {
        match self {
            TimeLayout::PlayerCaption => "player caption",
            TimeLayout::ArticleMeta => "article meta",
        }
    }
}

/// Parse `raw` according to `layout` exactly and attach the Europe/Prague
/// timezone. No partial parsing, no lenient fallback.
pub fn canonical_time(layout: TimeLayout, raw: &str) -> Result<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(raw, layout.format()).map_err(|source| {
        RozhlasError::Timestamp {
            layout: layout.name(),
            raw: raw.to_string(),
            source,
        }
    })?;

    match Prague.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        // Fall-back hour: both offsets are valid readings; keep standard time.
        LocalResult::Ambiguous(_, standard) => Ok(standard),
        LocalResult::None => Err(RozhlasError::InvalidLocalTime {
            raw: raw.to_string(),
        }),
    }
}
