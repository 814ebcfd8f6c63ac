//! Domain name encoding and compression-aware decoding.
//!
//! https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.4

use crate::{
    constants::{MAX_LABEL_LENGTH, MAX_NAME_LENGTH, POINTER_MASK, POINTER_OFFSET_MASK},
    error::WireError,
    wire::{read_bytes, read_u8},
};

/// Encodes a dotted name as length-prefixed labels ending in the root label.
///
/// Empty labels (a trailing dot, an empty name, `a..b`) are skipped.
pub fn encode_dns_name(domain_name: &str) -> Result<Vec<u8>, WireError> {
    let mut bytes = domain_name
        .split('.')
        .filter(|label| !label.is_empty())
        .try_fold(vec![], |mut acc, label| {
            if label.len() > MAX_LABEL_LENGTH {
                return Err(WireError::LabelTooLong(label.len()));
            }
            acc.push(label.len() as u8);
            acc.extend_from_slice(label.as_bytes());
            Ok(acc)
        })?;
    // Add a 0 byte to terminate the name
    bytes.push(0);

    if bytes.len() > MAX_NAME_LENGTH {
        return Err(WireError::NameTooLong(bytes.len()));
    }
    Ok(bytes)
}

pub fn is_pointer(byte: u8) -> bool {
    byte & POINTER_MASK == POINTER_MASK
}

/// Decodes the name starting at `cursor`, following compression pointers
/// relative to the start of `message`.
///
/// Returns the dotted name (no trailing dot, empty for the root) and the
/// offset just past the name's encoding at `cursor`. When a pointer is met
/// that offset is the one after the pointer's two bytes, not wherever the
/// pointer led.
pub fn decode_name(message: &[u8], cursor: usize) -> Result<(String, usize), WireError> {
    let mut parts: Vec<String> = vec![];
    let mut current_pos = cursor;
    let mut next_offset = None;
    let mut visited_pointers: Vec<usize> = vec![];
    // Wire length of the name so far, counting the terminating root label.
    let mut wire_length = 1;

    loop {
        let (length, after_length) = read_u8(message, current_pos)?;

        if length == 0 {
            next_offset.get_or_insert(after_length);
            break;
        }

        if is_pointer(length) {
            if visited_pointers.contains(&current_pos) {
                return Err(WireError::CompressionLoop {
                    offset: current_pos,
                });
            }
            visited_pointers.push(current_pos);

            let (low, after_pointer) = read_u8(message, after_length)?;
            next_offset.get_or_insert(after_pointer);
            current_pos = (((length & POINTER_OFFSET_MASK) as usize) << 8) | low as usize;
            continue;
        }

        wire_length += 1 + length as usize;
        if wire_length > MAX_NAME_LENGTH {
            return Err(WireError::NameTooLong(wire_length));
        }

        let (label, after_label) = read_bytes(message, after_length, length as usize)?;
        parts.push(String::from_utf8_lossy(label).into_owned());
        current_pos = after_label;
    }

    // next_offset is always set by the time the loop breaks
    Ok((parts.join("."), next_offset.unwrap_or(current_pos)))
}
