//! Binary snapshot persistence for vivarium boards.
//!
//! Serializes a [`GridSnapshot`](vivarium_grid::GridSnapshot) to any
//! `Write` sink and reads it back from any `Read` source, so callers
//! decide where boards live (files, buffers, sockets). Also provides an
//! FNV-1a [`snapshot_hash`] for fast equality checks between boards.
//!
//! # Format
//!
//! ```text
//! [MAGIC "VIVA"] [VERSION u8] [width u32 LE] [height u32 LE]
//! [cells: width * height bytes, 0 = dead / 1 = alive, y fastest]
//! ```
//!
//! One byte per cell, little-endian integers, no compression and no
//! self-describing schema. Decoding validates the magic, version,
//! dimensions, and every cell byte before any snapshot is built.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod hash;

pub use codec::{read_snapshot, write_snapshot};
pub use error::PersistError;
pub use hash::snapshot_hash;

/// Magic bytes at the start of every board file.
pub const MAGIC: [u8; 4] = *b"VIVA";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
