/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Cryptsy adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{ClockNonce, CounterNonce, Credentials, NonceSource};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CryptsyClient,
    CryptsyError,
    RequestSigner,
    Result,
    sign_body,
};

// Re-export all types
pub use types::*;
