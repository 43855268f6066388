/*
[INPUT]:  API key/secret pair and nonce strategy choice
[OUTPUT]: Opaque credentials and strictly increasing nonces
[POS]:    Auth layer - material needed to sign private requests
[UPDATE]: When credential handling or nonce strategies change
*/

pub mod credentials;
pub mod nonce;

pub use credentials::Credentials;
pub use nonce::{ClockNonce, CounterNonce, NonceSource};
