/// Logical metadata field
///
/// Each field can be stored in several places within Exif and IPTC. Reading
/// resolves them into one value, writing maps them to IPTC datasets.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SemanticField {
    Mime,
    Title,
    Description,
    Keywords,
    Author,
    Owner,
    Datetime,
    Orientation,
}

impl SemanticField {
    pub const ALL: [Self; 8] = [
        Self::Mime,
        Self::Title,
        Self::Description,
        Self::Keywords,
        Self::Author,
        Self::Owner,
        Self::Datetime,
        Self::Orientation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mime => "mime",
            Self::Title => "title",
            Self::Description => "description",
            Self::Keywords => "keywords",
            Self::Author => "author",
            Self::Owner => "owner",
            Self::Datetime => "datetime",
            Self::Orientation => "orientation",
        }
    }
}

impl std::fmt::Display for SemanticField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field name '{0}'")]
pub struct UnknownFieldName(pub String);

/// ```
/// # use pictag_common::semantic::*;
/// assert_eq!("title".parse(), Ok(SemanticField::Title));
/// assert_eq!(
///     "caption".parse::<SemanticField>(),
///     Err(UnknownFieldName(String::from("caption")))
/// );
/// ```
impl std::str::FromStr for SemanticField {
    type Err = UnknownFieldName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.name() == s)
            .ok_or_else(|| UnknownFieldName(s.to_string()))
    }
}
