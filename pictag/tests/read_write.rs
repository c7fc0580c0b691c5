use std::collections::BTreeMap;

use pictag::{
    Error, IptcEmbed, MetadataSource, ReadMode, Reader, TagTable, UnreadableExif, Writer,
};
use pictag_common::field;
use pictag_common::semantic::SemanticField;
use pictag_iptc::{Dataset, Iptc, Profile};

#[derive(Default)]
struct Source {
    missing: bool,
    table: Option<TagTable>,
    mime: Option<String>,
    iptc: Option<Vec<u8>>,
}

impl MetadataSource for Source {
    fn name(&self) -> String {
        String::from("picture.jpg")
    }

    fn exists(&self) -> bool {
        !self.missing
    }

    fn exif_table(&self) -> Result<TagTable, UnreadableExif> {
        assert!(!self.missing, "parsed a missing source");
        self.table
            .clone()
            .ok_or_else(|| UnreadableExif(String::from("broken IFD")))
    }

    fn mime_type(&self) -> Option<String> {
        self.mime.clone()
    }

    fn iptc_blob(&self) -> Option<Vec<u8>> {
        self.iptc.clone()
    }
}

#[test]
fn not_found() {
    let source = Source {
        missing: true,
        ..Default::default()
    };

    for mode in [ReadMode::Lenient, ReadMode::Strict] {
        assert_eq!(
            Reader::new(mode).read(&source),
            Err(Error::NotFound(String::from("picture.jpg")))
        );
    }
}

#[test]
fn unreadable_exif() {
    let source = Source {
        mime: Some(String::from("image/tiff")),
        ..Default::default()
    };

    let metadata = Reader::new(ReadMode::Lenient).read(&source).unwrap();
    assert_eq!(metadata.mime(), Some("image/tiff"));
    assert_eq!(metadata.title(), None);

    assert!(matches!(
        Reader::new(ReadMode::Strict).read(&source),
        Err(Error::UnreadableMetadata(_))
    ));
    assert_eq!(Reader::default().mode(), ReadMode::Lenient);
}

#[test]
fn read_with_iptc() {
    let mut table = TagTable::with_mime("image/jpeg");
    table.insert(field::Artist, "Jane Doe");

    let values = BTreeMap::from([
        (SemanticField::Title, String::from("Harbour")),
        (SemanticField::Datetime, String::from("2023-01-15T15:30:00-05:00")),
    ]);
    let blob = Writer::new(Profile::EXTENDED).encode(&values).unwrap();

    let source = Source {
        table: Some(table),
        iptc: Some(blob),
        ..Default::default()
    };

    let metadata = Reader::new(ReadMode::Strict).read(&source).unwrap();
    assert_eq!(metadata.mime(), Some("image/jpeg"));
    assert_eq!(metadata.author(), Some("Jane Doe"));
    assert_eq!(metadata.title(), Some("Harbour"));
    assert_eq!(metadata.datetime().unwrap().timestamp(), 1673778600);
}

#[test]
fn broken_iptc() {
    let source = Source {
        table: Some(TagTable::new()),
        iptc: Some(vec![0x1C, 2, 120, 0, 10, b'a']),
        ..Default::default()
    };

    assert_eq!(
        Reader::default().read(&source),
        Err(Error::Iptc(pictag_iptc::Error::TruncatedBlob { offset: 0 }))
    );
}

struct Sink {
    blobs: Vec<Vec<u8>>,
    fail: bool,
}

impl IptcEmbed for Sink {
    fn embed(&mut self, blob: Vec<u8>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        if self.fail {
            return Err("no APP13 segment".into());
        }

        let mut out = b"JPEG".to_vec();
        out.extend_from_slice(&blob);
        self.blobs.push(blob);
        Ok(out)
    }
}

#[test]
fn write_to_sink() {
    let writer = Writer::new(Profile::LEGACY);
    let values = BTreeMap::from([(SemanticField::Title, String::from("Pier"))]);
    let mut sink = Sink {
        blobs: Vec::new(),
        fail: false,
    };

    let out = writer.write(&values, &mut sink).unwrap();
    assert_eq!(out, b"JPEG\x1C\x02\x78\x00\x04Pier");
    assert_eq!(sink.blobs.len(), 1);

    sink.fail = true;
    assert_eq!(
        writer.write(&values, &mut sink),
        Err(Error::Embed(String::from("no APP13 segment")))
    );
}

#[test]
fn write_rejects_before_embedding() {
    let writer = Writer::new(Profile::EXTENDED);
    let values = BTreeMap::from([(SemanticField::Author, String::from("Jane"))]);
    let mut sink = Sink {
        blobs: Vec::new(),
        fail: false,
    };

    assert_eq!(
        writer.write(&values, &mut sink),
        Err(Error::Iptc(pictag_iptc::Error::UnknownField(String::from(
            "author"
        ))))
    );
    assert!(sink.blobs.is_empty());
}

#[test]
fn encode_str_names() {
    let writer = Writer::new(Profile::EXTENDED);

    assert_eq!(
        writer.encode_str([("caption", "x")]),
        Err(Error::Iptc(pictag_iptc::Error::UnknownField(String::from(
            "caption"
        ))))
    );

    let blob = writer
        .encode_str([("title", "First"), ("title", "Second")])
        .unwrap();
    let iptc = Iptc::new(blob).unwrap();
    assert_eq!(iptc.get_str(Dataset::Headline).as_deref(), Some("Second"));
    assert_eq!(iptc.records().len(), 1);
}
