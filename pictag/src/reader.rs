use pictag_iptc::Iptc;

use crate::error::{Error, Result};
use crate::{resolve, ResolvedMetadata, TagTable};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unreadable Exif data: {0}")]
pub struct UnreadableExif(pub String);

/// Access to the metadata of a picture
///
/// Implemented by container parsers that know where the Exif and IPTC data
/// are stored.
pub trait MetadataSource {
    /// Name used in error messages, usually the path
    fn name(&self) -> String;

    fn exists(&self) -> bool;

    /// Decoded Exif tags
    fn exif_table(&self) -> std::result::Result<TagTable, UnreadableExif>;

    /// MIME type determined without decoding the Exif data
    fn mime_type(&self) -> Option<String>;

    /// Raw IPTC blob if the container has one
    fn iptc_blob(&self) -> Option<Vec<u8>>;
}

/// Handling of unreadable Exif data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// Continue with only the MIME type
    #[default]
    Lenient,
    /// Fail with [`Error::UnreadableMetadata`]
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reader {
    mode: ReadMode,
}

impl Reader {
    pub fn new(mode: ReadMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ReadMode {
        self.mode
    }

    pub fn read(&self, source: &impl MetadataSource) -> Result<ResolvedMetadata> {
        if !source.exists() {
            return Err(Error::NotFound(source.name()));
        }

        let table = match source.exif_table() {
            Ok(table) => table,
            Err(err) => match self.mode {
                ReadMode::Strict => {
                    return Err(Error::UnreadableMetadata(format!("{}: {err}", source.name())))
                }
                ReadMode::Lenient => {
                    tracing::info!("{err} in '{}', only using MIME type", source.name());
                    source
                        .mime_type()
                        .map(TagTable::with_mime)
                        .unwrap_or_default()
                }
            },
        };

        let iptc = source
            .iptc_blob()
            .map(Iptc::new)
            .transpose()
            .map_err(|x| Error::Iptc(x.into_err()))?;

        if let Some(iptc) = &iptc {
            tracing::debug!("Using {} IPTC records", iptc.records().len());
        }

        Ok(resolve(&table, iptc.as_ref()))
    }
}
