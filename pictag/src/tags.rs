use std::collections::BTreeMap;

use pictag_common::exif::{Section, SectionTag};
use pictag_common::field;

/// Exif values as handed over by a container parser
///
/// Values are kept as text, grouped by section and then by tag name.
///
/// ```
/// # use pictag::TagTable;
/// # use pictag_common::exif::{Section, SectionTag};
/// # use pictag_common::field;
/// let mut table = TagTable::new();
/// table.insert(field::Artist, "Jane Doe");
///
/// assert_eq!(table.get(field::Artist), Some("Jane Doe"));
/// assert_eq!(table.get(SectionTag::new(Section::Ifd0, "Artist")), Some("Jane Doe"));
/// assert_eq!(table.get(SectionTag::new(Section::Exif, "Artist")), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable {
    sections: BTreeMap<Section, BTreeMap<String, String>>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table that only contains `FILE.MimeType`
    pub fn with_mime(mime: impl Into<String>) -> Self {
        let mut table = Self::new();
        table.insert(field::MimeType, mime);
        table
    }

    /// Set a value, returning the one it replaces
    pub fn insert<'a>(
        &mut self,
        key: impl Into<SectionTag<'a>>,
        value: impl Into<String>,
    ) -> Option<String> {
        let key = key.into();
        self.sections
            .entry(key.section)
            .or_default()
            .insert(key.tag.to_string(), value.into())
    }

    pub fn get<'a>(&self, key: impl Into<SectionTag<'a>>) -> Option<&str> {
        let key = key.into();
        self.sections
            .get(&key.section)?
            .get(key.tag)
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid tag table line {line}: '{content}'")]
pub struct InvalidTagLine {
    pub line: usize,
    pub content: String,
}

/// Read a table from `SECTION.Tag=value` lines
///
/// Empty lines and lines starting with `#` are ignored. Only the first `=`
/// separates the key from the value.
///
/// ```
/// # use pictag::TagTable;
/// # use pictag_common::field;
/// let table: TagTable = "# camera\nIFD0.Artist=Jane\nFILE.MimeType=image/jpeg\n"
///     .parse()
///     .unwrap();
///
/// assert_eq!(table.get(field::Artist), Some("Jane"));
/// assert_eq!(table.get(field::MimeType), Some("image/jpeg"));
/// assert!("IFD0.Artist".parse::<TagTable>().is_err());
/// ```
impl std::str::FromStr for TagTable {
    type Err = InvalidTagLine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut table = Self::new();

        for (line, content) in (1..).zip(s.lines()) {
            let trimmed = content.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let err = || InvalidTagLine {
                line,
                content: content.to_string(),
            };

            let (key, value) = trimmed.split_once('=').ok_or_else(err)?;
            let (section, tag) = key.trim().split_once('.').ok_or_else(err)?;
            let section: Section = section.parse().map_err(|_| err())?;

            if tag.is_empty() {
                return Err(err());
            }

            table.insert(SectionTag::new(section, tag), value);
        }

        Ok(table)
    }
}
