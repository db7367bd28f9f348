//! File type tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification of a file record.
///
/// Only `Property` files accept textual content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    /// Key/value property text
    Property,
    /// Binary image payload
    Image,
}

impl FileType {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Property => "PROPERTY",
            FileType::Image => "IMAGE",
        }
    }

    /// Whether files of this type may have content appended
    pub fn accepts_properties(&self) -> bool {
        matches!(self, FileType::Property)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PROPERTY" => Ok(FileType::Property),
            "IMAGE" => Ok(FileType::Image),
            other => Err(format!("Unknown file type: '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_property_accepts_content() {
        assert!(FileType::Property.accepts_properties());
        assert!(!FileType::Image.accepts_properties());
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("property".parse::<FileType>(), Ok(FileType::Property));
        assert_eq!("IMAGE".parse::<FileType>(), Ok(FileType::Image));
        assert!("video".parse::<FileType>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FileType::Property).unwrap();
        assert_eq!(json, "\"PROPERTY\"");
        let parsed: FileType = serde_json::from_str("\"IMAGE\"").unwrap();
        assert_eq!(parsed, FileType::Image);
    }
}
