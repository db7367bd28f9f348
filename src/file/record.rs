//! # File Record
//!
//! Content is stored as UTF-16 code units in insertion order. Appends are
//! gated on the file type: only `FileType::Property` files take content.

use super::errors::{FileError, FileResult};
use super::types::FileType;
use crate::checksum;

/// A typed file record holding UTF-16 content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    file_type: Option<FileType>,
    content: Vec<u16>,
}

impl File {
    /// Create an empty, untyped file
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty file with the given type
    pub fn with_type(file_type: FileType) -> Self {
        Self {
            file_type: Some(file_type),
            content: Vec::new(),
        }
    }

    /// Set the file type
    pub fn set_type(&mut self, file_type: FileType) {
        self.file_type = Some(file_type);
    }

    /// Get the file type, if one has been set
    pub fn file_type(&self) -> Option<FileType> {
        self.file_type
    }

    /// Append UTF-16 code units to the content.
    ///
    /// # Errors
    ///
    /// - `FileError::InvalidContent` if `content` is `None`
    /// - `FileError::WrongFileType` if the file is not a property file
    ///
    /// Content is left untouched on error. An empty slice is accepted and
    /// changes nothing.
    pub fn add_property(&mut self, content: Option<&[u16]>) -> FileResult<()> {
        let content = content.ok_or(FileError::InvalidContent)?;

        match self.file_type {
            Some(t) if t.accepts_properties() => {}
            actual => {
                return Err(FileError::WrongFileType {
                    expected: FileType::Property,
                    actual,
                })
            }
        }

        self.content.extend_from_slice(content);
        Ok(())
    }

    /// Append a string, encoded as UTF-16
    pub fn add_property_str(&mut self, content: &str) -> FileResult<()> {
        let units: Vec<u16> = content.encode_utf16().collect();
        self.add_property(Some(units.as_slice()))
    }

    /// Get the content as UTF-16 code units
    pub fn content(&self) -> &[u16] {
        &self.content
    }

    /// Decode the content for display (unpaired surrogates become U+FFFD)
    pub fn content_string(&self) -> String {
        String::from_utf16_lossy(&self.content)
    }

    /// Number of code units held
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// CRC32 of the big-endian encoded content, 0 when empty
    pub fn crc32(&self) -> FileResult<u64> {
        checksum::compute_checksum(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_new_file_is_empty_and_untyped() {
        let file = File::new();
        assert!(file.is_empty());
        assert_eq!(file.file_type(), None);
    }

    #[test]
    fn test_add_property_none_is_invalid() {
        let mut file = File::with_type(FileType::Property);
        assert_eq!(file.add_property(None), Err(FileError::InvalidContent));
        assert!(file.is_empty());
    }

    #[test]
    fn test_absent_content_checked_before_type() {
        let mut image = File::with_type(FileType::Image);
        assert_eq!(image.add_property(None), Err(FileError::InvalidContent));
        assert!(image.is_empty());

        let mut untyped = File::new();
        assert_eq!(untyped.add_property(None), Err(FileError::InvalidContent));
        assert!(untyped.is_empty());
    }

    #[test]
    fn test_add_property_on_image_rejected() {
        let mut file = File::new();
        file.set_type(FileType::Image);
        let pair = units("DATE=20250919");

        let err = file.add_property(Some(pair.as_slice())).unwrap_err();
        assert_eq!(
            err,
            FileError::WrongFileType {
                expected: FileType::Property,
                actual: Some(FileType::Image),
            }
        );
        assert!(file.is_empty());
    }

    #[test]
    fn test_add_property_untyped_rejected() {
        let mut file = File::new();
        assert!(matches!(
            file.add_property_str("A=1"),
            Err(FileError::WrongFileType { actual: None, .. })
        ));
    }

    #[test]
    fn test_add_property_appends_in_order() {
        let mut file = File::with_type(FileType::Property);
        file.add_property(Some(units("A=1").as_slice())).unwrap();
        file.add_property(Some(units(";B=2").as_slice())).unwrap();

        assert_eq!(file.content(), units("A=1;B=2").as_slice());
        assert_eq!(file.content_string(), "A=1;B=2");
        assert_eq!(file.len(), 7);
    }

    #[test]
    fn test_add_empty_slice_is_noop() {
        let mut file = File::with_type(FileType::Property);
        file.add_property_str("K=V").unwrap();
        file.add_property(Some(&[][..])).unwrap();
        assert_eq!(file.content_string(), "K=V");
    }

    #[test]
    fn test_retyping_gates_later_appends() {
        let mut file = File::with_type(FileType::Property);
        file.add_property_str("A=1").unwrap();
        file.set_type(FileType::Image);

        assert!(file.add_property_str("B=2").is_err());
        assert_eq!(file.content_string(), "A=1");
    }

    #[test]
    fn test_crc32_of_empty_file_is_zero() {
        assert_eq!(File::new().crc32(), Ok(0));
    }

    #[test]
    fn test_crc32_matches_big_endian_encoding() {
        let mut file = File::with_type(FileType::Property);
        file.add_property_str("X").unwrap();
        // "X" is U+0058, encoded as [0x00, 0x58]
        let expected = u64::from(crc32fast::hash(&[0x00, 0x58]));
        assert_eq!(file.crc32(), Ok(expected));
    }
}
