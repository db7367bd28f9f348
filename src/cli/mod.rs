//! CLI module
//!
//! Provides command-line interface for:
//! - checksum: CRC32 of appended property content
//! - bytes: big-endian encoding of appended property content

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{bytes, checksum, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
