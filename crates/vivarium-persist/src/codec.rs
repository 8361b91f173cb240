//! Binary encode/decode for the board format.
//!
//! All integers are little-endian. Cell bytes are strict: only 0 and 1
//! are accepted, anything else is corruption, not a future extension.

use std::io::{Read, Write};

use vivarium_grid::GridSnapshot;

use crate::error::PersistError;
use crate::{FORMAT_VERSION, MAGIC};

// ── Primitives ──────────────────────────────────────────────────

fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), PersistError> {
    w.write_all(&[v])?;
    Ok(())
}

fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), PersistError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

fn read_u8(r: &mut dyn Read) -> Result<u8, PersistError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u32_le(r: &mut dyn Read) -> Result<u32, PersistError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

// ── Snapshot encode/decode ──────────────────────────────────────

/// Encode `snapshot` to `w` in the board format.
///
/// # Errors
///
/// [`PersistError::Io`] if the sink fails.
pub fn write_snapshot(w: &mut dyn Write, snapshot: &GridSnapshot) -> Result<(), PersistError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u32_le(w, snapshot.width())?;
    write_u32_le(w, snapshot.height())?;
    for &alive in snapshot.alive() {
        write_u8(w, u8::from(alive))?;
    }
    Ok(())
}

/// Decode a board from `r`.
///
/// # Errors
///
/// - [`PersistError::InvalidMagic`] if the data is not a board file.
/// - [`PersistError::UnsupportedVersion`] for an unknown version byte.
/// - [`PersistError::MalformedData`] for zero dimensions, an extent
///   that overflows, or a cell byte other than 0 or 1.
/// - [`PersistError::Io`] on truncation or source failure.
pub fn read_snapshot(r: &mut dyn Read) -> Result<GridSnapshot, PersistError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(PersistError::InvalidMagic);
    }

    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion { found: version });
    }

    let width = read_u32_le(r)?;
    let height = read_u32_le(r)?;
    if width == 0 || height == 0 {
        return Err(PersistError::MalformedData {
            detail: format!("zero dimension in {width}x{height} header"),
        });
    }
    let cell_count = (width as usize).checked_mul(height as usize).ok_or_else(|| {
        PersistError::MalformedData {
            detail: format!("extent {width}x{height} overflows"),
        }
    })?;

    let mut cells = vec![0u8; cell_count];
    r.read_exact(&mut cells)?;

    let mut alive = Vec::with_capacity(cell_count);
    for (index, byte) in cells.into_iter().enumerate() {
        match byte {
            0 => alive.push(false),
            1 => alive.push(true),
            other => {
                return Err(PersistError::MalformedData {
                    detail: format!("cell byte {other} at offset {index} (expected 0 or 1)"),
                })
            }
        }
    }

    GridSnapshot::new(width, height, alive).map_err(|e| PersistError::MalformedData {
        detail: format!("rejected decoded snapshot: {e}"),
    })
}
