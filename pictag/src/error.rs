pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Source not found: {0}")]
    NotFound(String),
    #[error("Unreadable metadata: {0}")]
    UnreadableMetadata(String),
    #[error("IPTC: {0}")]
    Iptc(pictag_iptc::Error),
    #[error("Embedding IPTC failed: {0}")]
    Embed(String),
}
