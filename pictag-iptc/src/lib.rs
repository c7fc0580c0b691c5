#![doc = include_str!("../README.md")]

mod charset;
pub mod codec;
mod dataset;
mod error;
mod iptc;
mod mapping;
mod writer;

pub use charset::UTF8_DECLARATION;
pub use codec::Record;
pub use dataset::*;
pub use error::*;
pub use iptc::Iptc;
pub use mapping::*;
pub use writer::encode_fields;
