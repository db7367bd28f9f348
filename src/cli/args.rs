//! CLI argument definitions using clap
//!
//! Commands:
//! - propfile checksum [--config <path>] [--type <type>] <CONTENT>...
//! - propfile bytes [--config <path>] <CONTENT>...

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::file::FileType;

/// propfile - typed property files with CRC32 content checksums
#[derive(Parser, Debug)]
#[command(name = "propfile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append each CONTENT in order and print the checksum
    Checksum {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// File type (defaults to the configured default_type)
        #[arg(long = "type", value_parser = parse_file_type)]
        file_type: Option<FileType>,

        /// Content fragments, appended in order
        #[arg(required = true)]
        content: Vec<String>,
    },

    /// Print the big-endian UTF-16 encoding of the concatenated CONTENT
    Bytes {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Content fragments, appended in order
        #[arg(required = true)]
        content: Vec<String>,
    },
}

fn parse_file_type(s: &str) -> Result<FileType, String> {
    s.parse()
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checksum_command() {
        let cli = Cli::try_parse_from(["propfile", "checksum", "--type", "image", "A=1", ";B=2"])
            .unwrap();
        match cli.command {
            Command::Checksum {
                config,
                file_type,
                content,
            } => {
                assert!(config.is_none());
                assert_eq!(file_type, Some(FileType::Image));
                assert_eq!(content, vec!["A=1".to_string(), ";B=2".to_string()]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_content_required() {
        assert!(Cli::try_parse_from(["propfile", "bytes"]).is_err());
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(Cli::try_parse_from(["propfile", "checksum", "--type", "video", "X"]).is_err());
    }
}
