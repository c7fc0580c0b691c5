use std::path::PathBuf;

use pictag::{MetadataSource, ReadMode, Reader, TagTable, UnreadableExif};
use tracing_subscriber::prelude::*;

/// Tag table stored as `SECTION.Tag=value` lines next to an optional IPTC blob
struct TagFile {
    tags: PathBuf,
    iptc: Option<Vec<u8>>,
}

impl MetadataSource for TagFile {
    fn name(&self) -> String {
        self.tags.display().to_string()
    }

    fn exists(&self) -> bool {
        self.tags.is_file()
    }

    fn exif_table(&self) -> Result<TagTable, UnreadableExif> {
        let content =
            std::fs::read_to_string(&self.tags).map_err(|err| UnreadableExif(err.to_string()))?;
        content
            .parse()
            .map_err(|err: pictag::InvalidTagLine| UnreadableExif(err.to_string()))
    }

    fn mime_type(&self) -> Option<String> {
        None
    }

    fn iptc_blob(&self) -> Option<Vec<u8>> {
        self.iptc.clone()
    }
}

fn main() {
    let mut mode = ReadMode::Lenient;
    let mut paths = Vec::new();

    for arg in std::env::args().skip(1) {
        if arg == "--strict" {
            mode = ReadMode::Strict;
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let mut paths = paths.into_iter();
    let Some(tags) = paths.next() else {
        eprintln!("Usage: pictag-resolve [--strict] <tags.txt> [iptc-blob]");
        std::process::exit(2);
    };

    let iptc = paths.next().map(|path| {
        std::fs::read(&path).unwrap_or_else(|err| {
            eprintln!("Can't read IPTC blob '{}': {err}", path.display());
            std::process::exit(1);
        })
    });

    let source = TagFile { tags, iptc };

    let metadata = Reader::new(mode).read(&source).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    });

    for (field, value) in metadata.iter() {
        println!("{field}:\t{value}");
    }
}
