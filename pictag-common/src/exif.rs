/// Key for a value in an Exif tag table
///
/// The container parser hands over tag tables grouped into sections, with
/// tags addressed by their textual name.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SectionTag<'a> {
    pub section: Section,
    pub tag: &'a str,
}

impl<'a> SectionTag<'a> {
    pub fn new(section: Section, tag: &'a str) -> Self {
        Self { section, tag }
    }
}

impl<T: Field> From<T> for SectionTag<'static> {
    fn from(_value: T) -> Self {
        SectionTag {
            section: T::SECTION,
            tag: T::NAME,
        }
    }
}

impl std::fmt::Display for SectionTag<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.section, self.tag)
    }
}

pub trait Field {
    const NAME: &'static str;
    const SECTION: Section;
}

/// Group of tags in a tag table
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    /// Properties of the file itself, like its MIME type
    File,
    /// Values derived by the container parser
    Computed,
    /// Primary image file directory
    Ifd0,
    /// Exif specific sub-IFD
    Exif,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::File, Self::Computed, Self::Ifd0, Self::Exif];

    pub fn name(self) -> &'static str {
        match self {
            Self::File => "FILE",
            Self::Computed => "COMPUTED",
            Self::Ifd0 => "IFD0",
            Self::Exif => "EXIF",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tag table section '{0}'")]
pub struct UnknownSection(pub String);

/// ```
/// # use pictag_common::exif::Section;
/// assert_eq!("IFD0".parse(), Ok(Section::Ifd0));
/// assert_eq!("computed".parse(), Ok(Section::Computed));
/// assert!("THUMBNAIL".parse::<Section>().is_err());
/// ```
impl std::str::FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
