mod client;
mod error;
mod fetch;
pub mod models;
pub mod time;

pub use client::RozhlasClient;
pub use error::RozhlasError;
pub use fetch::{HttpFetcher, PageFetcher};
pub use models::{Episode, LinkKind};

pub type Result<T> = std::result::Result<T, RozhlasError>;
