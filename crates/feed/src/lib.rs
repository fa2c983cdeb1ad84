mod channel;
mod error;

pub use channel::{build_channel, render, APP_NAME, APP_URL};
pub use error::FeedError;

pub type Result<T> = std::result::Result<T, FeedError>;
