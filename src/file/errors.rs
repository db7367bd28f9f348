//! # File Errors

use thiserror::Error;

use super::types::FileType;

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// File record and checksum errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    /// Content passed to an append was absent
    #[error("Invalid content: no content supplied")]
    InvalidContent,

    /// Append attempted on a file whose type cannot hold properties
    #[error("Wrong file type: expected {expected}, found {}", display_type(.actual))]
    WrongFileType {
        expected: FileType,
        actual: Option<FileType>,
    },

    /// CRC32 requested over zero bytes
    #[error("Empty bytes array")]
    EmptyBytesArray,
}

fn display_type(file_type: &Option<FileType>) -> String {
    match file_type {
        Some(t) => t.to_string(),
        None => "no type".to_string(),
    }
}

impl FileError {
    /// Get the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            FileError::InvalidContent => "PROPFILE_INVALID_CONTENT",
            FileError::WrongFileType { .. } => "PROPFILE_WRONG_FILE_TYPE",
            FileError::EmptyBytesArray => "PROPFILE_EMPTY_BYTES_ARRAY",
        }
    }
}
