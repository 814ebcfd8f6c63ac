//! Bounds-checked big-endian integer reads.
//!
//! Every reader returns the value together with the offset just past it, so
//! callers can thread a cursor through a message without slicing by hand.

use crate::error::WireError;

fn take(buffer: &[u8], offset: usize, width: usize) -> Result<&[u8], WireError> {
    offset
        .checked_add(width)
        .and_then(|end| buffer.get(offset..end))
        .ok_or(WireError::OutOfBounds {
            offset,
            width,
            len: buffer.len(),
        })
}

pub fn read_u8(buffer: &[u8], offset: usize) -> Result<(u8, usize), WireError> {
    let bytes = take(buffer, offset, 1)?;
    Ok((bytes[0], offset + 1))
}

pub fn read_u16(buffer: &[u8], offset: usize) -> Result<(u16, usize), WireError> {
    let bytes = take(buffer, offset, 2)?;
    Ok((u16::from_be_bytes([bytes[0], bytes[1]]), offset + 2))
}

pub fn read_u32(buffer: &[u8], offset: usize) -> Result<(u32, usize), WireError> {
    let bytes = take(buffer, offset, 4)?;
    Ok((
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        offset + 4,
    ))
}

/// Reads an unsigned integer of `width` bytes (1, 2 or 4).
pub fn read_uint(buffer: &[u8], offset: usize, width: usize) -> Result<(u32, usize), WireError> {
    match width {
        1 => read_u8(buffer, offset).map(|(v, next)| (v as u32, next)),
        2 => read_u16(buffer, offset).map(|(v, next)| (v as u32, next)),
        4 => read_u32(buffer, offset),
        other => Err(WireError::UnsupportedWidth(other)),
    }
}

/// Borrows `len` raw bytes starting at `offset`.
pub fn read_bytes(buffer: &[u8], offset: usize, len: usize) -> Result<(&[u8], usize), WireError> {
    let bytes = take(buffer, offset, len)?;
    Ok((bytes, offset + len))
}
