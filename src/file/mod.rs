//! # File Records
//!
//! A typed record that accumulates UTF-16 content and derives a CRC32
//! checksum over it.

pub mod errors;
pub mod record;
pub mod types;

pub use errors::{FileError, FileResult};
pub use record::File;
pub use types::FileType;
