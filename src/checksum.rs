//! CRC32 checksums over file content
//!
//! Content is encoded as big-endian UTF-16 (two bytes per code unit, most
//! significant first) before being handed to a `Crc32Algorithm`.
//!
//! The default algorithm is CRC32 (IEEE polynomial) via the crc32fast crate.
//! An empty file always checksums to 0 and no algorithm is constructed.

use crc32fast::Hasher;

use crate::file::{File, FileError, FileResult};

/// A CRC32 implementation the checksum pass delegates to.
pub trait Crc32Algorithm {
    /// Compute the CRC32 of `bytes`, widened to `u64`.
    ///
    /// # Errors
    ///
    /// Returns `FileError::EmptyBytesArray` if `bytes` is empty.
    fn calculate_crc32(&self, bytes: &[u8]) -> FileResult<u64>;
}

/// IEEE CRC32 backed by crc32fast
#[derive(Debug, Default, Clone, Copy)]
pub struct Crc32Fast;

impl Crc32Fast {
    pub fn new() -> Self {
        Self
    }
}

impl Crc32Algorithm for Crc32Fast {
    fn calculate_crc32(&self, bytes: &[u8]) -> FileResult<u64> {
        if bytes.is_empty() {
            return Err(FileError::EmptyBytesArray);
        }

        let mut hasher = Hasher::new();
        hasher.update(bytes);
        Ok(u64::from(hasher.finalize()))
    }
}

/// Encodes UTF-16 code units as big-endian byte pairs.
///
/// The output is always exactly twice as long as the input.
pub fn to_big_endian_bytes(units: &[u16]) -> Vec<u8> {
    units.iter().flat_map(|u| u.to_be_bytes()).collect()
}

/// Computes the checksum of a file's content with the default algorithm.
pub fn compute_checksum(file: &File) -> FileResult<u64> {
    compute_checksum_with(file, Crc32Fast::new)
}

/// Computes the checksum of a file's content with a caller-supplied algorithm.
///
/// `make` is only called when the content is non-empty; an empty file yields
/// `Ok(0)` without constructing an algorithm.
///
/// # Errors
///
/// Propagates any error from `Crc32Algorithm::calculate_crc32`.
pub fn compute_checksum_with<A, F>(file: &File, make: F) -> FileResult<u64>
where
    A: Crc32Algorithm,
    F: FnOnce() -> A,
{
    if file.is_empty() {
        return Ok(0);
    }

    let bytes = to_big_endian_bytes(file.content());
    make().calculate_crc32(&bytes)
}

/// Formats a CRC32 checksum for display.
///
/// Format: `crc32:XXXXXXXX` (lowercase hex, 8 characters, zero-padded).
/// Takes `u32` because `Crc32Algorithm` results are widened to `u64`;
/// callers narrow with `u32::try_from` before formatting.
///
/// # Example
///
/// ```
/// use propfile::checksum::format_checksum;
/// let formatted = format_checksum(0xDEADBEEF);
/// assert_eq!(formatted, "crc32:deadbeef");
/// ```
pub fn format_checksum(checksum: u32) -> String {
    format!("crc32:{:08x}", checksum)
}

/// Parses a formatted checksum string back to its value.
///
/// Returns `None` if the prefix is missing or the value does not fit in 32 bits.
pub fn parse_checksum(formatted: &str) -> Option<u32> {
    let stripped = formatted.strip_prefix("crc32:")?;
    u32::from_str_radix(stripped, 16).ok()
}
