//! propfile - typed property files with CRC32 content checksums
//!
//! A `File` accumulates UTF-16 content when its type is `Property`; its
//! checksum is the CRC32 of that content encoded as big-endian byte pairs.

pub mod checksum;
pub mod cli;
pub mod config;
pub mod file;
pub mod observability;
