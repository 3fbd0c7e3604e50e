//! Sum encoding options
//!
//! Field names and the nullary-constructor policy used by the tag/contents
//! codec. The defaults reproduce the widely used tagged-object convention:
//! `{"tag": ..., "contents": ...}`, with zero-argument constructors still
//! carrying an empty `contents` array.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{Error, Result};

pub(crate) static DEFAULT_ENCODING: LazyLock<SumEncoding> = LazyLock::new(SumEncoding::default);

/// Options controlling how constructors are tagged
///
/// The tag and contents field names must differ; every constructor and
/// deserializer of this type checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SumEncodingFile")]
pub struct SumEncoding {
    pub(crate) tag_field: String,
    pub(crate) contents_field: String,
    pub(crate) nullary_to_string_tag: bool,
}

/// Unchecked form of [`SumEncoding`] as read from configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
struct SumEncodingFile {
    tag_field: String,
    contents_field: String,
    nullary_to_string_tag: bool,
}

impl Default for SumEncodingFile {
    fn default() -> Self {
        let SumEncoding {
            tag_field,
            contents_field,
            nullary_to_string_tag,
        } = SumEncoding::default();
        Self {
            tag_field,
            contents_field,
            nullary_to_string_tag,
        }
    }
}

impl TryFrom<SumEncodingFile> for SumEncoding {
    type Error = Error;

    fn try_from(file: SumEncodingFile) -> Result<Self> {
        Ok(SumEncoding::new(file.tag_field, file.contents_field)?
            .with_nullary_to_string_tag(file.nullary_to_string_tag))
    }
}

impl Default for SumEncoding {
    fn default() -> Self {
        Self {
            tag_field: "tag".to_string(),
            contents_field: "contents".to_string(),
            nullary_to_string_tag: false,
        }
    }
}

impl SumEncoding {
    /// Create options with the given field names
    pub fn new(tag_field: impl Into<String>, contents_field: impl Into<String>) -> Result<Self> {
        let options = Self {
            tag_field: tag_field.into(),
            contents_field: contents_field.into(),
            nullary_to_string_tag: false,
        };
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML fragment
    ///
    /// Keys that are not present keep their default values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SumEncodingFile = toml::from_str(content)?;
        SumEncoding::try_from(file)
    }

    /// Use a different tag field name
    pub fn with_tag_field(mut self, name: impl Into<String>) -> Result<Self> {
        self.tag_field = name.into();
        self.validate()?;
        Ok(self)
    }

    /// Use a different contents field name
    pub fn with_contents_field(mut self, name: impl Into<String>) -> Result<Self> {
        self.contents_field = name.into();
        self.validate()?;
        Ok(self)
    }

    /// Toggle the bare-string encoding of zero-argument constructors
    pub fn with_nullary_to_string_tag(mut self, enabled: bool) -> Self {
        self.nullary_to_string_tag = enabled;
        self
    }

    /// Object key holding the constructor name
    pub fn tag_field(&self) -> &str {
        &self.tag_field
    }

    /// Object key holding the constructor arguments
    pub fn contents_field(&self) -> &str {
        &self.contents_field
    }

    /// Whether zero-argument constructors of multi-constructor types encode
    /// as a bare string of the constructor name
    pub fn nullary_to_string_tag(&self) -> bool {
        self.nullary_to_string_tag
    }

    fn validate(&self) -> Result<()> {
        if self.tag_field == self.contents_field {
            return Err(Error::ConflictingFields(self.tag_field.clone()));
        }
        Ok(())
    }
}
