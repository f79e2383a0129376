//! Default payload digest: 64-bit FNV-1a.
//!
//! Fast and stable across platforms and releases, which is all a rate-limit
//! bucket key needs. It is not collision resistant against an adversary.

/// Caller-supplied digest over the joined payload bytes.
///
/// Must be deterministic; nothing checks this.
pub type HashFn = dyn Fn(&[u8]) -> String + Send + Sync;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over `bytes`.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

/// 64-bit FNV-1a rendered as 16 lowercase, zero-padded hex digits.
///
/// This is the reference a custom [`HashFn`] can be checked against.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:016x}", fnv1a_64(bytes))
}
