use std::sync::Arc;

use reqwest::Client;
use rozhlas::RozhlasClient;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Client,
    pub rozhlas: Arc<RozhlasClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if config.danger_accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled for upstream fetches");
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http_client = builder.build()?;
        let rozhlas = Arc::new(RozhlasClient::new(http_client.clone()));

        Ok(Self {
            config: Arc::new(config),
            http_client,
            rozhlas,
        })
    }
}
