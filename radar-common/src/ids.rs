//! Deterministic id utilities
//!
//! Every row written by the seed pipeline gets an id derived purely from a
//! string seed, so re-running against the same snapshot reproduces the same
//! ids and foreign keys.
//!
//! The id is the first 128 bits of the SHA-256 digest of the seed, rendered
//! in the hyphenated UUID layout. Bits are used verbatim (no version nibble),
//! so these ids are not RFC 4122 UUIDs and must not be parsed as such by
//! consumers that check the version.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Derive a stable id from a seed string
pub fn generate_id(seed: &str) -> Uuid {
    let digest = Sha256::digest(seed.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::from_bytes(bytes)
}

/// Derive a stable id and render it as `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
pub fn generate_id_string(seed: &str) -> String {
    generate_id(seed).hyphenated().to_string()
}

/// Seed for a child row of a collection owned by `parent_seed`
///
/// `order_index` is the 1-based position in the source collection.
pub fn child_seed(parent_seed: &str, table: &str, order_index: usize) -> String {
    format!("{}:{}:{}", parent_seed, table, order_index)
}

/// Namespaced seed for a top-level entity (e.g. `article-42`)
pub fn entity_seed(kind: &str, key: &str) -> String {
    format!("{}-{}", kind, key)
}
