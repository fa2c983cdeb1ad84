use std::sync::Arc;

use scraper::{ElementRef, Html, Selector};

use crate::error::RozhlasError;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::models::{Episode, LinkKind};
use crate::time::{canonical_time, TimeLayout, UNKNOWN_PUBLISHED};
use crate::Result;

/// Archive listing URL prefix; the percent-encoded show id is appended.
const LISTING_URL: &str = "https://hledani.rozhlas.cz/iRadio/?porad[]=";

// Selectors tied to the current markup of the upstream site. An upstream
// redesign is expected to break exactly these constants.
const SEL_ARCHIVE_ITEM: &str = "ul.box-audio-archive li.item";
const SEL_ITEM_LINK: &str = ".action-player a";
const SEL_PLAYER_DATE: &str = "div#block-track-player div.content h3 em";
const SEL_PLAYER_DESC: &str = "div#block-track-player div.content p";
const SEL_ARTICLE_TIME: &str = r#"meta[property="article:published_time"]"#;
const SEL_PLAYLIST_LINK: &str = "div.sm2-playlist-wrapper a";

/// Audio location synthesized for a player page's numeric id. The player
/// page itself is never scraped for the audio URL.
fn media_url(audio_id: &str) -> String {
    format!("https://media.rozhlas.cz/_audio/{}.mp3", audio_id)
}

fn listing_url(show_id: &str) -> String {
    format!("{}{}", LISTING_URL, urlencoding::encode(show_id))
}

/// Client for the Czech Radio iRadio archive.
///
/// Resolves a show's archive listing into a flat, page-ordered collection of
/// [`Episode`] records. Detail pages are fetched strictly in sequence; one
/// malformed item aborts the whole request.
pub struct RozhlasClient {
    fetcher: Arc<dyn PageFetcher>,
}

impl RozhlasClient {
    /// Create a client fetching over HTTP with the given reqwest client.
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_fetcher(Arc::new(HttpFetcher::new(client)))
    }

    /// Create a client with a custom page fetcher (tests use canned pages).
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch the show's archive listing and resolve every listed item.
    ///
    /// Output order is page order: episodes of the first archive item come
    /// first, and within a multi-track item, playlist order is kept. No
    /// deduplication is performed.
    pub async fn fetch_show(&self, show_id: &str) -> Result<Vec<Episode>> {
        let url = listing_url(show_id);
        tracing::debug!("Fetching archive listing: {}", url);

        let html = self.fetcher.fetch_text(&url).await?;
        let links = collect_item_links(&html)?;
        tracing::debug!("Found {} archive items for show {}", links.len(), show_id);

        let mut episodes = Vec::new();
        for link in links {
            episodes.extend(self.extract(&link).await?);
        }
        Ok(episodes)
    }

    /// Resolve one archive-item link into its episode records.
    ///
    /// A player link yields exactly one record; an article link yields one
    /// record per playlist entry (possibly none).
    pub async fn extract(&self, link: &str) -> Result<Vec<Episode>> {
        match LinkKind::classify(link) {
            LinkKind::Player { audio_id } => {
                let html = self.fetcher.fetch_text(link).await?;
                let episode = parse_player_page(&html, &audio_id, link)?;
                Ok(vec![episode])
            }
            LinkKind::Article => {
                let html = self.fetcher.fetch_text(link).await?;
                parse_article_page(&html, link)
            }
        }
    }
}

fn selector(selectors: &str) -> Result<Selector> {
    Selector::parse(selectors).map_err(|e| RozhlasError::Selector(format!("{}: {}", selectors, e)))
}

fn text_content(element: &ElementRef) -> String {
    element.text().collect()
}

/// Pull the detail-page link out of every archive item, in page order.
///
/// Each item must carry exactly one action link; any other count means the
/// listing markup changed.
fn collect_item_links(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let item_sel = selector(SEL_ARCHIVE_ITEM)?;
    let link_sel = selector(SEL_ITEM_LINK)?;

    let mut links = Vec::new();
    for item in document.select(&item_sel) {
        let anchors: Vec<_> = item.select(&link_sel).collect();
        if anchors.len() != 1 {
            return Err(RozhlasError::Structure(format!(
                "archive item has {} action links, expected exactly 1",
                anchors.len()
            )));
        }
        let href = anchors[0].value().attr("href").ok_or_else(|| {
            RozhlasError::Structure("archive item action link has no href".to_string())
        })?;
        links.push(href.to_string());
    }
    Ok(links)
}

/// Single-track strategy: one date caption, one description paragraph, audio
/// URL synthesized from the id captured during classification.
fn parse_player_page(html: &str, audio_id: &str, link: &str) -> Result<Episode> {
    let document = Html::parse_document(html);
    let date_sel = selector(SEL_PLAYER_DATE)?;
    let desc_sel = selector(SEL_PLAYER_DESC)?;

    let dates: Vec<_> = document.select(&date_sel).collect();
    if dates.len() != 1 {
        return Err(RozhlasError::Structure(format!(
            "player page has {} date nodes, expected exactly 1",
            dates.len()
        )));
    }
    // Only the first paragraph carries the description.
    let desc = document.select(&desc_sel).next().ok_or_else(|| {
        RozhlasError::Structure("player page has no description paragraph".to_string())
    })?;

    let raw_date = text_content(&dates[0]);
    let episode = Episode {
        title: text_content(&desc),
        audio_url: media_url(audio_id),
        published: canonical_time(TimeLayout::PlayerCaption, &raw_date)?,
        duration_secs: 0,
    };
    tracing::debug!("Extracted from {}: {:?}", link, episode);
    Ok(episode)
}

/// Multi-track strategy: one shared published-time metadata node, one record
/// per playlist anchor. Zero anchors is a valid empty result.
fn parse_article_page(html: &str, link: &str) -> Result<Vec<Episode>> {
    let document = Html::parse_document(html);
    let time_sel = selector(SEL_ARTICLE_TIME)?;
    let anchor_sel = selector(SEL_PLAYLIST_LINK)?;

    let anchors: Vec<_> = document.select(&anchor_sel).collect();
    if anchors.is_empty() {
        tracing::debug!("No playlist entries on article page {}", link);
        return Ok(Vec::new());
    }

    let meta = document.select(&time_sel).next().ok_or_else(|| {
        RozhlasError::Structure("article page has no published-time metadata node".to_string())
    })?;
    // Attribute absent means "unknown publish time"; articles carry one
    // timestamp shared by all tracks.
    let raw_time = meta.value().attr("content").unwrap_or(UNKNOWN_PUBLISHED);
    let published = canonical_time(TimeLayout::ArticleMeta, raw_time)?;

    let mut episodes = Vec::new();
    for anchor in &anchors {
        let href = anchor
            .value()
            .attr("href")
            .ok_or_else(|| RozhlasError::Structure("playlist anchor has no href".to_string()))?;
        let episode = Episode {
            title: text_content(anchor),
            audio_url: href.to_string(),
            published,
            duration_secs: 0,
        };
        tracing::debug!("Extracted from {}: {:?}", link, episode);
        episodes.push(episode);
    }
    Ok(episodes)
}
