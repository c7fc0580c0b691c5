use std::collections::BTreeMap;

use pictag::{resolve, ReadMode, Reader, TagTable, Writer};
use pictag_common::datetime::DateTime;
use pictag_common::field;
use pictag_common::orientation::Orientation;
use pictag_common::semantic::SemanticField;
use pictag_iptc::{Dataset, Iptc, Profile};

fn tag_file() -> TagTable {
    std::fs::read_to_string("picture.tags")
        .unwrap()
        .parse()
        .unwrap()
}

#[test]
fn tag_file_resolution() {
    let table = tag_file();
    assert_eq!(table.get(field::DocumentName), Some(""));

    let metadata = resolve(&table, None);

    assert_eq!(metadata.mime(), Some("image/jpeg"));
    assert_eq!(metadata.title(), None);
    assert_eq!(metadata.description(), Some("Fishing boats at the pier"));
    assert_eq!(metadata.author(), Some("Jane Doe"));
    assert_eq!(metadata.orientation(), Orientation::Rotate270);
    assert_eq!(
        metadata.datetime().map(|x| x.to_string()).as_deref(),
        Some("2023-01-15 15:30:00")
    );
}

#[test]
fn extended_write_then_read() {
    let values = BTreeMap::from([
        (SemanticField::Title, String::from("Hafen in Zürich")),
        (SemanticField::Description, String::from("Boote")),
        (SemanticField::Keywords, String::from("see")),
        (SemanticField::Owner, String::from("Agentur")),
        (SemanticField::Datetime, String::from("2023:01:15 15:30:00")),
    ]);

    let blob = Writer::new(Profile::EXTENDED).encode(&values).unwrap();
    let iptc = Iptc::new(blob).unwrap();
    assert!(iptc.records().iter().all(|x| x.record_number == 2));

    let metadata = resolve(&TagTable::new(), Some(&iptc));
    assert_eq!(metadata.title(), Some("Hafen in Zürich"));
    assert_eq!(metadata.description(), Some("Boote"));
    assert_eq!(metadata.keywords(), Some("see"));
    assert_eq!(metadata.owner(), Some("Agentur"));

    let datetime = metadata.datetime().unwrap();
    assert!(matches!(datetime, DateTime::Utc(_)));
    assert_eq!(datetime.to_string(), "2023-01-15 15:30:00 UTC");
}

#[test]
fn legacy_write_then_read() {
    let values = BTreeMap::from([(SemanticField::Title, "t".repeat(40_000))]);

    let blob = Writer::new(Profile::LEGACY).encode(&values).unwrap();
    assert_eq!(&blob[..5], &[0x1C, 2, 120, 0x80, 0x04]);

    let iptc = Iptc::new(blob).unwrap();
    assert_eq!(iptc.get(Dataset::Caption).unwrap().len(), 40_000);
    assert_eq!(
        resolve(&TagTable::new(), Some(&iptc)).title().map(str::len),
        Some(40_000)
    );
}

#[test]
fn exif_wins_over_written_iptc() {
    let values = BTreeMap::from([
        (SemanticField::Title, String::from("From IPTC")),
        (SemanticField::Datetime, String::from("2020-06-01T12:00:00+02:00")),
    ]);
    let blob = Writer::new(Profile::EXTENDED).encode(&values).unwrap();
    let iptc = Iptc::new(blob).unwrap();

    let mut table = tag_file();
    table.insert(field::DocumentName, "From Exif");

    let metadata = resolve(&table, Some(&iptc));
    assert_eq!(metadata.title(), Some("From Exif"));
    assert_eq!(
        metadata.datetime().map(|x| x.to_string()).as_deref(),
        Some("2023-01-15 15:30:00")
    );

    let metadata = resolve(&TagTable::new(), Some(&iptc));
    assert_eq!(metadata.title(), Some("From IPTC"));
    assert_eq!(
        metadata.datetime().map(|x| x.to_string()).as_deref(),
        Some("2020-06-01 14:00:00 UTC")
    );
}

#[test]
fn reader_with_tag_file() {
    struct Source(TagTable, Vec<u8>);

    impl pictag::MetadataSource for Source {
        fn name(&self) -> String {
            String::from("picture.tags")
        }

        fn exists(&self) -> bool {
            true
        }

        fn exif_table(&self) -> Result<TagTable, pictag::UnreadableExif> {
            Ok(self.0.clone())
        }

        fn mime_type(&self) -> Option<String> {
            Some(String::from("image/jpeg"))
        }

        fn iptc_blob(&self) -> Option<Vec<u8>> {
            Some(self.1.clone())
        }
    }

    let blob = Writer::new(Profile::EXTENDED)
        .encode_str([("owner", "Agentur"), ("title", "Hafen")])
        .unwrap();

    let metadata = Reader::new(ReadMode::Strict)
        .read(&Source(tag_file(), blob))
        .unwrap();

    assert_eq!(metadata.title(), Some("Hafen"));
    assert_eq!(metadata.owner(), Some("Agentur"));
    assert_eq!(metadata.author(), Some("Jane Doe"));
}
