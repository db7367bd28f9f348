//! CLI command implementations
//!
//! Each command builds a `File` from its arguments and returns the JSON
//! payload for the success response. Rejections and checksum failures are
//! logged before being returned.

use std::io::{self, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::checksum::{compute_checksum, format_checksum, to_big_endian_bytes};
use crate::config::Config;
use crate::file::{File, FileType};
use crate::observability::{Event, Logger};

use super::args::Command;
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{write_error, write_response};

/// Parse arguments, run the command and write its response to stdout
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let mut stdout = io::stdout();
    run_command(cli.command, &mut stdout)
}

/// Run a command, writing a JSON response to `out`.
///
/// On failure the error response is written before the error is returned.
pub fn run_command<W: Write>(cmd: Command, out: &mut W) -> CliResult<()> {
    let result = match cmd {
        Command::Checksum {
            config,
            file_type,
            content,
        } => load_config(config.as_deref())
            .and_then(|(config, logger)| checksum(&config, &logger, file_type, &content)),
        Command::Bytes { config, content } => load_config(config.as_deref())
            .and_then(|(_, logger)| bytes(&logger, &content)),
    };

    match result {
        Ok(data) => write_response(out, data),
        Err(e) => {
            write_error(out, e.code_str(), e.message())?;
            Err(e)
        }
    }
}

fn load_config(path: Option<&Path>) -> CliResult<(Config, Logger)> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let logger = config.logger()?;

    if let Some(path) = path {
        let path = path.display().to_string();
        logger.event(Event::ConfigLoaded, &[("path", path.as_str())]);
    }

    Ok((config, logger))
}

/// Append every fragment to a file of the given type
fn build_file(logger: &Logger, file_type: FileType, content: &[String]) -> CliResult<File> {
    let mut file = File::with_type(file_type);

    for fragment in content {
        if let Err(e) = file.add_property_str(fragment) {
            logger.event(
                Event::PropertyRejected,
                &[("code", e.code()), ("type", file_type.as_str())],
            );
            return Err(e.into());
        }
        logger.event(Event::PropertyAppended, &[("content", fragment.as_str())]);
    }

    Ok(file)
}

/// Checksum of the concatenated fragments
pub fn checksum(
    config: &Config,
    logger: &Logger,
    file_type: Option<FileType>,
    content: &[String],
) -> CliResult<Value> {
    let file_type = file_type.unwrap_or(config.default_type);
    let file = build_file(logger, file_type, content)?;

    let crc = compute_checksum(&file).map_err(|e| {
        logger.event(Event::ChecksumFailed, &[("code", e.code())]);
        e
    })?;
    let formatted = formatted_checksum(crc)?;
    let length = file.len().to_string();
    logger.event(
        Event::ChecksumComputed,
        &[("crc32", formatted.as_str()), ("length", length.as_str())],
    );

    Ok(json!({
        "type": file_type.as_str(),
        "length": file.len(),
        "crc32": crc,
        "formatted": formatted,
    }))
}

/// `crc32:XXXXXXXX` form of a checksum; values wider than 32 bits are rejected
fn formatted_checksum(crc: u64) -> CliResult<String> {
    u32::try_from(crc).map(format_checksum).map_err(|_| {
        CliError::new(
            CliErrorCode::ChecksumOutOfRange,
            format!("Checksum {} does not fit in 32 bits", crc),
        )
    })
}

/// Big-endian UTF-16 encoding of the concatenated fragments, as lowercase hex
pub fn bytes(logger: &Logger, content: &[String]) -> CliResult<Value> {
    let file = build_file(logger, FileType::Property, content)?;
    let encoded = to_big_endian_bytes(file.content());
    let hex: String = encoded.iter().map(|b| format!("{:02x}", b)).collect();

    Ok(json!({
        "length": encoded.len(),
        "hex": hex,
    }))
}
