/*
[INPUT]:  HTTP client configuration, credentials and API method names
[OUTPUT]: Parsed JSON responses from public and private endpoints
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod market;
pub mod public;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{CryptsyError, Result};
pub use signature::{RequestSigner, sign_body};

pub use client::{ClientConfig, CryptsyClient};
