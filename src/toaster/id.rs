// SPDX-License-Identifier: MPL-2.0
//! Toast identifiers.
//!
//! An id is the current UNIX time in milliseconds written in base 36,
//! followed by a 12 character base-36 random suffix. Ids only need to be
//! distinct within a session; they are not collision resistant and must not
//! be used for anything security related.

use rand::Rng;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_DIGITS: usize = 10;
const SUFFIX_WIDTH: usize = 12;

/// Opaque identifier of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    /// Generates a fresh id from the wall clock and the thread-local RNG.
    #[must_use]
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64);
        Self::from_parts(millis, &mut rand::thread_rng())
    }

    fn from_parts<R: Rng + ?Sized>(millis: u64, rng: &mut R) -> Self {
        let mut id = to_base36(millis);
        let digits: String = (0..RANDOM_DIGITS)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        id.push_str(&format!("{digits:0>width$}", width = SUFFIX_WIDTH));
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToastId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for ToastId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
