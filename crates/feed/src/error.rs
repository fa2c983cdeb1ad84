use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// The scan produced no episodes; a feed without entries has no recency
    /// marker, so the request fails instead of serving a degenerate feed.
    #[error("no episodes found for the requested show")]
    Empty,

    #[error("failed to serialize feed: {0}")]
    Write(#[from] rss::Error),

    #[error("serialized feed is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
