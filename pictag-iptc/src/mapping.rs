use pictag_common::semantic::SemanticField;

use crate::error::{Error, Result};
use crate::{Dataset, DatasetCode};

/// Where a field is stored when writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    pub field: SemanticField,
    pub dataset: Dataset,
    /// Values are cut to this number of bytes
    pub max_length: Option<usize>,
}

impl MappingEntry {
    const fn new(field: SemanticField, dataset: Dataset, max_length: Option<usize>) -> Self {
        Self {
            field,
            dataset,
            max_length,
        }
    }

    pub fn code(&self) -> DatasetCode {
        self.dataset.code()
    }

    /// Cut `value` to the maximum length
    ///
    /// The cut is byte based and can split multi-byte characters.
    pub fn truncate<'a>(&self, value: &'a [u8]) -> &'a [u8] {
        match self.max_length {
            Some(max_length) if value.len() > max_length => {
                tracing::warn!(
                    "Truncating '{}' from {} to {max_length} bytes",
                    self.field,
                    value.len()
                );
                value.get(..max_length).unwrap_or(value)
            }
            _ => value,
        }
    }
}

/// Set of fields a writer supports
///
/// ```
/// # use pictag_iptc::{Dataset, Error, Profile};
/// # use pictag_common::semantic::SemanticField;
/// assert_eq!(
///     Profile::LEGACY.to_code(SemanticField::Title),
///     Ok(Dataset::Caption.code())
/// );
/// assert_eq!(
///     Profile::EXTENDED.to_code(SemanticField::Author),
///     Err(Error::UnknownField(String::from("author")))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    name: &'static str,
    entries: &'static [MappingEntry],
}

const LEGACY_ENTRIES: [MappingEntry; 1] = [MappingEntry::new(
    SemanticField::Title,
    Dataset::Caption,
    None,
)];

const EXTENDED_ENTRIES: [MappingEntry; 6] = [
    MappingEntry::new(SemanticField::Title, Dataset::Headline, Some(256)),
    MappingEntry::new(SemanticField::Description, Dataset::Notes, Some(1024)),
    MappingEntry::new(SemanticField::Keywords, Dataset::Keywords, Some(64)),
    MappingEntry::new(SemanticField::Owner, Dataset::OwnerId, Some(128)),
    MappingEntry::new(SemanticField::Datetime, Dataset::DateCreated, Some(8)),
    MappingEntry::new(SemanticField::Datetime, Dataset::TimeCreated, Some(11)),
];

impl Profile {
    /// Only writes the title, into the caption, without length limit
    pub const LEGACY: Self = Self {
        name: "legacy",
        entries: &LEGACY_ENTRIES,
    };

    /// Title, description, keywords, owner, and date with length limits
    pub const EXTENDED: Self = Self {
        name: "extended",
        entries: &EXTENDED_ENTRIES,
    };

    pub const ALL: [Self; 2] = [Self::LEGACY, Self::EXTENDED];

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &'static [MappingEntry] {
        self.entries
    }

    pub fn supports(&self, field: SemanticField) -> bool {
        self.entries.iter().any(|x| x.field == field)
    }

    /// Dataset code of the first entry for `field`
    pub fn to_code(&self, field: SemanticField) -> Result<DatasetCode> {
        self.entry(field).map(MappingEntry::code)
    }

    /// Cut `value` to the maximum length of `field`
    pub fn truncate<'a>(&self, field: SemanticField, value: &'a [u8]) -> Result<&'a [u8]> {
        Ok(self.entry(field)?.truncate(value))
    }

    fn entry(&self, field: SemanticField) -> Result<&'static MappingEntry> {
        self.entries
            .iter()
            .find(|x| x.field == field)
            .ok_or_else(|| Error::UnknownField(field.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown profile '{0}'")]
pub struct UnknownProfile(pub String);

impl std::str::FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.name == s)
            .ok_or_else(|| UnknownProfile(s.to_string()))
    }
}

/// Dataset code for a name of the reader mapping
///
/// The reader mapping covers all named datasets, see [`Dataset::name`].
///
/// ```
/// # use pictag_iptc::{reader_code, Error};
/// assert_eq!(reader_code("notes").unwrap().to_string(), "2#230");
/// assert_eq!(reader_code("title"), Err(Error::UnknownField(String::from("title"))));
/// ```
pub fn reader_code(name: &str) -> Result<DatasetCode> {
    Dataset::from_name(name)
        .map(Dataset::code)
        .ok_or_else(|| Error::UnknownField(name.to_string()))
}
