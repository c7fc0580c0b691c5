use std::collections::BTreeMap;

use pictag_common::datetime::DateTime;
use pictag_common::orientation::Orientation;
use pictag_common::semantic::SemanticField;

/// Resolved value of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    DateTime(DateTime),
    Orientation(Orientation),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::DateTime(d) => write!(f, "{d}"),
            Self::Orientation(o) => write!(f, "{} ({o})", o.exif_value()),
        }
    }
}

/// Metadata after resolving all sources
///
/// Only contains fields for which a candidate was found, except for the
/// orientation which is always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetadata {
    values: BTreeMap<SemanticField, Value>,
}

impl Default for ResolvedMetadata {
    fn default() -> Self {
        Self {
            values: BTreeMap::from([(
                SemanticField::Orientation,
                Value::Orientation(Orientation::default()),
            )]),
        }
    }
}

impl ResolvedMetadata {
    pub(crate) fn insert(&mut self, field: SemanticField, value: Value) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: SemanticField) -> Option<&Value> {
        self.values.get(&field)
    }

    pub fn text(&self, field: SemanticField) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn mime(&self) -> Option<&str> {
        self.text(SemanticField::Mime)
    }

    pub fn title(&self) -> Option<&str> {
        self.text(SemanticField::Title)
    }

    pub fn description(&self) -> Option<&str> {
        self.text(SemanticField::Description)
    }

    /// First keyword entry
    pub fn keywords(&self) -> Option<&str> {
        self.text(SemanticField::Keywords)
    }

    pub fn author(&self) -> Option<&str> {
        self.text(SemanticField::Author)
    }

    pub fn owner(&self) -> Option<&str> {
        self.text(SemanticField::Owner)
    }

    pub fn datetime(&self) -> Option<DateTime> {
        match self.get(SemanticField::Datetime) {
            Some(Value::DateTime(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self.get(SemanticField::Orientation) {
            Some(Value::Orientation(o)) => *o,
            _ => Orientation::default(),
        }
    }

    /// Fields in the order of [`SemanticField`]
    pub fn iter(&self) -> impl Iterator<Item = (SemanticField, &Value)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }
}
