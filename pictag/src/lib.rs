#![doc = include_str!("../README.md")]

mod error;
mod reader;
mod resolved;
mod resolver;
mod tags;
pub mod timestamp;
mod writer;

pub use error::{Error, Result};
pub use reader::{MetadataSource, ReadMode, Reader, UnreadableExif};
pub use resolved::{ResolvedMetadata, Value};
pub use resolver::resolve;
pub use tags::{InvalidTagLine, TagTable};
pub use writer::{IptcEmbed, Writer};

static_assertions::assert_impl_all!(pictag_iptc::Iptc: Send, Sync);
static_assertions::assert_impl_all!(TagTable: Send, Sync);
static_assertions::assert_impl_all!(ResolvedMetadata: Send, Sync);
static_assertions::assert_impl_all!(Writer: Send, Sync);
