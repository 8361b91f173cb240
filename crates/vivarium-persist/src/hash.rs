//! Hashing for fast board comparison.
//!
//! Uses FNV-1a over the snapshot's dimensions and cell bits. Not
//! cryptographically secure; intended for cheap equality checks between
//! saved and live boards.

use vivarium_grid::GridSnapshot;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Compute a hash over a board snapshot.
///
/// Folds in the dimensions first, so an empty 2x8 board and an empty
/// 4x4 board hash differently even though their cell runs are equal.
pub fn snapshot_hash(snapshot: &GridSnapshot) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, snapshot.width());
    hash = fnv1a_u32(hash, snapshot.height());
    for &alive in snapshot.alive() {
        hash = fnv1a_byte(hash, u8::from(alive));
    }
    hash
}
