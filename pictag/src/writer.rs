use std::collections::BTreeMap;

use pictag_common::semantic::SemanticField;
use pictag_iptc::Profile;

use crate::error::{Error, Result};

/// Stores an IPTC blob inside a picture
///
/// Implemented by container writers. Returns the new file contents.
pub trait IptcEmbed {
    fn embed(&mut self, blob: Vec<u8>) -> std::result::Result<Vec<u8>, Box<dyn std::error::Error>>;
}

/// Encodes field values as IPTC records
///
/// ```
/// # use pictag::Writer;
/// # use pictag_iptc::{Dataset, Iptc, Profile};
/// let writer = Writer::new(Profile::EXTENDED);
/// let blob = writer
///     .encode_str([("title", "Harbour"), ("keywords", "boats")])
///     .unwrap();
///
/// let iptc = Iptc::new(blob).unwrap();
/// assert_eq!(iptc.get_str(Dataset::Headline).as_deref(), Some("Harbour"));
///
/// assert!(writer.encode_str([("author", "Jane")]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Writer {
    profile: Profile,
}

impl Writer {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn encode(&self, values: &BTreeMap<SemanticField, String>) -> Result<Vec<u8>> {
        tracing::debug!(
            "Encoding {} fields with profile '{}'",
            values.len(),
            self.profile.name()
        );
        pictag_iptc::encode_fields(&self.profile, values).map_err(Error::Iptc)
    }

    /// Same as [`Writer::encode`] but with field names
    ///
    /// Later values replace earlier ones for the same field.
    pub fn encode_str<K, V>(&self, values: impl IntoIterator<Item = (K, V)>) -> Result<Vec<u8>>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(name, value)| -> Result<(SemanticField, String)> {
                let field = name
                    .as_ref()
                    .parse::<SemanticField>()
                    .map_err(|err| Error::Iptc(err.into()))?;
                Ok((field, value.into()))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        self.encode(&values)
    }

    /// Encode the values and hand the blob to `sink`
    pub fn write(
        &self,
        values: &BTreeMap<SemanticField, String>,
        sink: &mut impl IptcEmbed,
    ) -> Result<Vec<u8>> {
        let blob = self.encode(values)?;
        let len = blob.len();

        let out = sink
            .embed(blob)
            .map_err(|err| Error::Embed(err.to_string()))?;
        tracing::info!("Embedded IPTC blob of {len} bytes");

        Ok(out)
    }
}
