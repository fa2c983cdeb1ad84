use axum::extract::{OriginalUri, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Usage hint served when no show id is given.
const USAGE: &str = "Specify show ... ?id=show name";
const RSS_MIME: &str = "application/rss+xml";

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub id: Option<String>,
}

/// Translate a show's archive listing into an RSS podcast feed.
///
/// Runs the whole pipeline per request: listing fetch, per-item extraction,
/// feed assembly. Nothing is cached between requests.
pub async fn podcast(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<FeedQuery>,
) -> AppResult<Response> {
    let Some(show_id) = query.id else {
        return Ok(([(header::CONTENT_TYPE, "text/html")], USAGE).into_response());
    };

    let episodes = state.rozhlas.fetch_show(&show_id).await?;
    let channel = feed::build_channel(&episodes, &show_id, &uri.to_string())?;
    let xml = feed::render(&channel)?;

    Ok(([(header::CONTENT_TYPE, RSS_MIME)], xml).into_response())
}
