/*
[INPUT]:  URL-encoded request body and API credentials
[OUTPUT]: Hex HMAC-SHA512 signature and Sign/Key header pair
[POS]:    HTTP layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::Credentials;

type HmacSha512 = Hmac<Sha512>;

pub const SIGN_HEADER: &str = "Sign";
pub const KEY_HEADER: &str = "Key";

/// Lowercase hex HMAC-SHA512 of `body`, keyed by `secret`
pub fn sign_body(secret: &[u8], body: &str) -> String {
    let mut mac = HmacSha512::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Signs encoded form bodies for private endpoints
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    /// Create a new request signer for the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Signature of the raw encoded body, exactly as it will be sent
    pub fn sign(&self, body: &str) -> String {
        sign_body(self.credentials.secret_bytes(), body)
    }

    /// Header pairs to attach to a private request
    pub fn headers(&self, body: &str) -> [(&'static str, String); 2] {
        [
            (SIGN_HEADER, self.sign(body)),
            (KEY_HEADER, self.credentials.api_key().to_string()),
        ]
    }
}
