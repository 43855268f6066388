/*
[INPUT]:  API key and secret supplied by the embedding application
[OUTPUT]: Opaque credential pair, its shared nonce sequence, redacted Debug
[POS]:    Auth layer - credential storage for the client's lifetime
[UPDATE]: When credential sources or redaction rules change
*/

use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret as _, SecretString};

use super::nonce::{ClockNonce, NonceSource};

/// API key/secret pair used to sign private requests.
///
/// Clones share one nonce sequence, so every client built from the same
/// credentials keeps nonces strictly increasing. The secret never appears in
/// `Debug` output or log events.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
    nonce_source: Arc<dyn NonceSource>,
}

impl Credentials {
    /// Create credentials from an API key and secret, with a clock nonce
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            nonce_source: Arc::new(ClockNonce::new()),
        }
    }

    /// Replace the nonce sequence; clones made afterwards share the new one
    pub fn with_nonce_source(mut self, nonce_source: Arc<dyn NonceSource>) -> Self {
        self.nonce_source = nonce_source;
        self
    }

    /// Next nonce from the sequence shared by all clones
    pub fn next_nonce(&self) -> u64 {
        self.nonce_source.next_nonce()
    }

    /// Public API key, sent in the `Key` header
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.api_secret.expose_secret().as_bytes()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
