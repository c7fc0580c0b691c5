use std::collections::BTreeMap;

use pictag_common::semantic::SemanticField;

use crate::error::{Error, Result};
use crate::{Dataset, Iptc, MappingEntry, Profile, Record};

const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Encode field values into an IPTC blob
///
/// All fields have to be supported by the `profile`. Records are written in
/// the order the profile declares them, not in the order of `values`. Text is
/// stored as UTF-8.
///
/// ```
/// # use std::collections::BTreeMap;
/// # use pictag_common::semantic::SemanticField;
/// # use pictag_iptc::{encode_fields, Profile};
/// let values = BTreeMap::from([(SemanticField::Title, String::from("Pier"))]);
/// let blob = encode_fields(&Profile::LEGACY, &values).unwrap();
/// assert_eq!(blob, [0x1C, 2, 120, 0, 4, b'P', b'i', b'e', b'r']);
/// ```
pub fn encode_fields(profile: &Profile, values: &BTreeMap<SemanticField, String>) -> Result<Vec<u8>> {
    if let Some(field) = values.keys().find(|x| !profile.supports(**x)) {
        return Err(Error::UnknownField(field.to_string()));
    }

    let mut records = Vec::new();

    for entry in profile.entries() {
        if let Some(value) = values.get(&entry.field) {
            let value = entry_value(entry, value)?;
            records.push(Record::new(entry.dataset, entry.truncate(&value).to_vec()));
        }
    }

    Iptc::serialize(&records)
}

fn entry_value(entry: &MappingEntry, value: &str) -> Result<Vec<u8>> {
    if entry.field != SemanticField::Datetime {
        return Ok(value.as_bytes().to_vec());
    }

    let datetime = parse_datetime(value).ok_or_else(|| Error::InvalidValue {
        field: entry.field,
        value: value.to_string(),
    })?;

    let formatted = match entry.dataset {
        Dataset::DateCreated => datetime.format("%Y%m%d").to_string(),
        Dataset::TimeCreated => datetime.format("%H%M%S%z").to_string(),
        other => {
            tracing::error!("Date can't be stored in dataset {other:?}");
            return Err(Error::InvalidValue {
                field: entry.field,
                value: value.to_string(),
            });
        }
    };

    Ok(formatted.into_bytes())
}

/// Accepts the Exif layout, stored with offset `+0000`, and RFC 3339
fn parse_datetime(value: &str) -> Option<chrono::DateTime<chrono::FixedOffset>> {
    let value = value.trim();

    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(value, EXIF_DATETIME_FORMAT) {
        return Some(naive.and_utc().fixed_offset());
    }

    chrono::DateTime::parse_from_rfc3339(value).ok()
}
