/*
[INPUT]:  Wall clock or a seeded counter
[OUTPUT]: Strictly increasing nonce values for signed requests
[POS]:    Auth layer - replay protection for private endpoints
[UPDATE]: When adding nonce strategies or changing clock resolution
*/

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use chrono::Utc;

/// Source of nonces for private requests.
///
/// Implementations must return a value strictly greater than every value
/// they returned before, including when called from several threads at once.
pub trait NonceSource: Send + Sync + Debug {
    fn next_nonce(&self) -> u64;
}

/// Unix-seconds nonce, bumped past the previous value when the clock has not
/// advanced (or went backwards) since the last call.
#[derive(Debug, Default)]
pub struct ClockNonce {
    last: Mutex<u64>,
}

impl ClockNonce {
    /// Create a clock-backed nonce source
    pub fn new() -> Self {
        Self::default()
    }

    fn now_seconds() -> u64 {
        u64::try_from(Utc::now().timestamp()).unwrap_or(0)
    }
}

impl NonceSource for ClockNonce {
    fn next_nonce(&self) -> u64 {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let next = Self::now_seconds().max(*last + 1);
        *last = next;
        next
    }
}

/// Counter nonce starting at a fixed value, for deterministic requests.
#[derive(Debug)]
pub struct CounterNonce {
    next: AtomicU64,
}

impl CounterNonce {
    /// First call to `next_nonce` returns `start`
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl NonceSource for CounterNonce {
    fn next_nonce(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}
