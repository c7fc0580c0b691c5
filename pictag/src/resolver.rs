use pictag_common::exif::{Field, SectionTag};
use pictag_common::field;
use pictag_common::orientation::Orientation;
use pictag_common::semantic::SemanticField;
use pictag_iptc::{Dataset, Iptc};

use crate::resolved::{ResolvedMetadata, Value};
use crate::{timestamp, TagTable};

/// Place a text value can be found
#[derive(Debug, Clone, Copy)]
enum Candidate {
    Tag(SectionTag<'static>),
    Iptc(Dataset),
}

const fn tag<T: Field>() -> Candidate {
    Candidate::Tag(SectionTag {
        section: T::SECTION,
        tag: T::NAME,
    })
}

const MIME: &[Candidate] = &[tag::<field::MimeType>()];
const TITLE: &[Candidate] = &[
    tag::<field::UserComment>(),
    tag::<field::DocumentName>(),
    Candidate::Iptc(Dataset::Caption),
    Candidate::Iptc(Dataset::Headline),
    Candidate::Iptc(Dataset::ObjectName),
];
const DESCRIPTION: &[Candidate] = &[
    tag::<field::ImageDescription>(),
    Candidate::Iptc(Dataset::Notes),
];
const KEYWORDS: &[Candidate] = &[Candidate::Iptc(Dataset::Keywords)];
const AUTHOR: &[Candidate] = &[tag::<field::Artist>()];
const OWNER: &[Candidate] = &[Candidate::Iptc(Dataset::OwnerId)];

const TEXT_FIELDS: [(SemanticField, &[Candidate]); 6] = [
    (SemanticField::Mime, MIME),
    (SemanticField::Title, TITLE),
    (SemanticField::Description, DESCRIPTION),
    (SemanticField::Keywords, KEYWORDS),
    (SemanticField::Author, AUTHOR),
    (SemanticField::Owner, OWNER),
];

impl Candidate {
    fn lookup(self, table: &TagTable, iptc: Option<&Iptc>) -> Option<String> {
        let value = match self {
            Self::Tag(key) => table.get(key).map(ToString::to_string),
            Self::Iptc(dataset) => iptc?.get_str(dataset),
        }?;

        let value = value.trim_matches(|c: char| c.is_whitespace() || c == '\0');
        if value.is_empty() {
            tracing::debug!("Skipping empty value in {self}");
            return None;
        }

        Some(value.to_string())
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tag(key) => write!(f, "{key}"),
            Self::Iptc(dataset) => write!(f, "IPTC {}", dataset.code()),
        }
    }
}

/// Resolve all fields from a tag table and an optional IPTC blob
///
/// Every field is taken from the first candidate that carries a non-empty
/// value. Values are trimmed. Fields without any candidate are missing from
/// the result, except for the orientation which defaults to
/// [`Orientation::Normal`].
///
/// ```
/// # use pictag::{resolve, TagTable};
/// # use pictag_common::field;
/// # use pictag_common::orientation::Orientation;
/// let mut table = TagTable::new();
/// table.insert(field::DocumentName, " Harbour ");
/// table.insert(field::Orientation, "6");
///
/// let metadata = resolve(&table, None);
/// assert_eq!(metadata.title(), Some("Harbour"));
/// assert_eq!(metadata.orientation(), Orientation::Rotate90);
/// assert_eq!(metadata.datetime(), None);
/// ```
pub fn resolve(table: &TagTable, iptc: Option<&Iptc>) -> ResolvedMetadata {
    let mut metadata = ResolvedMetadata::default();

    for (field, candidates) in TEXT_FIELDS {
        if let Some(value) = candidates.iter().find_map(|x| x.lookup(table, iptc)) {
            metadata.insert(field, Value::Text(value));
        }
    }

    if let Some(datetime) = timestamp::reconcile(table, iptc) {
        metadata.insert(SemanticField::Datetime, Value::DateTime(datetime));
    }

    metadata.insert(
        SemanticField::Orientation,
        Value::Orientation(orientation(table)),
    );

    metadata
}

fn orientation(table: &TagTable) -> Orientation {
    let Some(value) = table.get(field::Orientation) else {
        return Orientation::default();
    };

    Orientation::from_exif_str(value).unwrap_or_else(|| {
        tracing::debug!("Ignoring invalid orientation '{value}'");
        Orientation::default()
    })
}
