//! # Hash Oracle
//!
//! Maps any string to a value uniformly distributed in `[0, 1)`.
//!
//! The digest is SHA-256 over the UTF-8 bytes of the seed; its first four bytes are read
//! as a big-endian `u32` and divided by `2^32`. SHA-256 is used for its avalanche
//! behavior and stability across platforms and releases, not for secrecy: salting one
//! domain with different purpose tags yields independent-looking values.

use sha2::{Digest, Sha256};
use starfield_domain::constants::SALT_SEPARATOR;

const SCALE: f64 = 4_294_967_296.0; // 2^32

/// Deterministic value in `[0, 1)` for `seed`.
pub fn unit_hash(seed: &str) -> f64 {
    let digest = Sha256::digest(seed.as_bytes());
    let word = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    f64::from(word) / SCALE
}

/// [`unit_hash`] of `"<key>_<tag>"`.
pub fn salted_unit(key: &str, tag: &str) -> f64 {
    let mut seed = String::with_capacity(key.len() + tag.len() + 1);
    seed.push_str(key);
    seed.push(SALT_SEPARATOR);
    seed.push_str(tag);
    unit_hash(&seed)
}

/// Salted hash recentred to `[-0.5, 0.5)`.
pub fn salted_centered(key: &str, tag: &str) -> f64 {
    salted_unit(key, tag) - 0.5
}
