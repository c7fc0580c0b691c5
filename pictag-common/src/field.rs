//! Tag table fields
//!
//! Definition of the Exif tags that take part in metadata resolution, together
//! with the section of the tag table they are looked up in.

mod macros;

use crate::exif::Section;

macros::make_tags![
    // File
    (MimeType, Section::File),
    /// Modification time of the file, currently not used for resolution
    (FileDateTime, Section::File),

    // Computed
    /// User comment as decoded by the container parser
    (UserComment, Section::Computed),

    // Primary
    (DocumentName, Section::Ifd0),
    (ImageDescription, Section::Ifd0),
    (Artist, Section::Ifd0),
    /// Image orientation and mirroring
    (Orientation, Section::Ifd0),
    /// Modification time, formatted as `YYYY:MM:DD HH:MM:SS`
    (DateTime, Section::Ifd0),

    // Exif
    (DateTimeOriginal, Section::Exif),
    (DateTimeDigitized, Section::Exif),
];
