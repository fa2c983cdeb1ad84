#[derive(Debug, Clone)]
pub struct Config {
    /// Accept invalid TLS certificates from the upstream archive. Off by
    /// default; only for when the upstream certificate chain is genuinely
    /// broken.
    pub danger_accept_invalid_certs: bool,
}

impl Config {
    pub fn new(danger_accept_invalid_certs: bool) -> Self {
        Self {
            danger_accept_invalid_certs,
        }
    }
}
