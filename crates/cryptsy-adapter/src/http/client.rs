/*
[INPUT]:  HTTP configuration (base URLs, timeouts), credentials, nonce source
[OUTPUT]: Configured reqwest client plus the public/private query primitives
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::auth::{Credentials, NonceSource};
use crate::http::{CryptsyError, RequestSigner, Result};

/// Base URLs for Cryptsy API
const PUBLIC_BASE_URL: &str = "http://pubapi.cryptsy.com/api.php";
const PRIVATE_BASE_URL: &str = "https://www.cryptsy.com/api";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Keys the client always sets itself on private requests
const RESERVED_KEYS: [&str; 2] = ["method", "nonce"];

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for Cryptsy API
#[derive(Debug)]
pub struct CryptsyClient {
    http_client: Client,
    public_base_url: Url,
    private_base_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
}

impl CryptsyClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_urls(credentials, config, PUBLIC_BASE_URL, PRIVATE_BASE_URL)
    }

    /// Create a new client against explicit public/private endpoints
    pub fn with_config_and_base_urls(
        credentials: Credentials,
        config: ClientConfig,
        public_base_url: &str,
        private_base_url: &str,
    ) -> Result<Self> {
        if config.timeout.is_zero() {
            return Err(CryptsyError::Config("timeout must be non-zero".to_string()));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            public_base_url: Url::parse(public_base_url)?,
            private_base_url: Url::parse(private_base_url)?,
            signer: RequestSigner::new(credentials.clone()),
            credentials,
        })
    }

    /// Replace the nonce strategy used for private requests
    ///
    /// Only this client's credentials switch; clones handed to other
    /// clients keep the sequence they already share.
    pub fn with_nonce_source(mut self, nonce_source: Arc<dyn NonceSource>) -> Self {
        self.credentials = self.credentials.with_nonce_source(nonce_source);
        self
    }

    /// Credentials this client signs with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Call a public endpoint and return the parsed JSON body
    ///
    /// GET {public}?method={method}[&marketid={market_id}]
    pub async fn public_api_query(&self, method: &str, market_id: Option<u64>) -> Result<Value> {
        let url = self.public_url(method, market_id);
        debug!(method, ?market_id, "public api query");
        self.send_json(self.http_client.get(url)).await
    }

    /// Call a private endpoint with signed form parameters
    ///
    /// POST {private}, body = params + method + nonce, headers Sign/Key
    pub async fn private_api_query<P>(&self, method: &str, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let nonce = self.credentials.next_nonce();
        let body = encode_private_body(method, nonce, params)?;
        debug!(method, nonce, "private api query");

        let mut builder = self
            .http_client
            .post(self.private_base_url.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        for (name, value) in self.signer.headers(&body) {
            builder = builder.header(name, value);
        }

        self.send_json(builder.body(body)).await
    }

    fn public_url(&self, method: &str, market_id: Option<u64>) -> Url {
        let mut url = self.public_base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("method", method);
            if let Some(id) = market_id {
                pairs.append_pair("marketid", &id.to_string());
            }
        }
        url
    }

    /// Send the request and decode the body, mapping non-2xx to an error
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "non-success HTTP status");
            return Err(CryptsyError::status_error(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Form-encode caller parameters, then set `method` and `nonce`
///
/// Caller pairs using a reserved key are dropped so each appears once.
pub(crate) fn encode_private_body<P>(method: &str, nonce: u64, params: &P) -> Result<String>
where
    P: Serialize + ?Sized,
{
    let encoded = serde_html_form::to_string(params)?;
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(encoded.as_bytes()) {
        if RESERVED_KEYS.contains(&key.as_ref()) {
            debug!(key = %key, "dropping caller value for reserved key");
            continue;
        }
        serializer.append_pair(&key, &value);
    }

    Ok(serializer
        .append_pair("method", method)
        .append_pair("nonce", &nonce.to_string())
        .finish())
}
