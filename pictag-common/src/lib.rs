#![doc = include_str!("../README.md")]

pub mod datetime;
pub mod error;
pub mod exif;
pub mod field;
pub mod orientation;
pub mod read;
pub mod semantic;
pub mod utils;

pub mod prelude {
    pub use crate::exif::Field as _;
    pub use crate::read::{ReadExt, SliceExt};
    pub use crate::utils::UsizeExt;
}
