/// Record number of the IIM application record
pub const APPLICATION_RECORD: u8 = 2;

pictag_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    /// Datasets of the application record (record 2)
    pub enum Dataset {
        ObjectName = 5,
        EditStatus = 7,
        Urgency = 10,
        Category = 15,
        Keywords = 25,
        DateCreated = 55,
        /// Time with offset, formatted as `HHMMSS±HHMM`
        TimeCreated = 60,
        Byline = 80,
        BylineTitle = 85,
        City = 90,
        Headline = 105,
        Credit = 110,
        Source = 115,
        CopyrightNotice = 116,
        Contact = 118,
        Caption = 120,
        WriterEditor = 122,
        OwnerId = 188,
        Notes = 230,
    }
);

impl Dataset {
    pub const NAMED: [Self; 19] = [
        Self::ObjectName,
        Self::EditStatus,
        Self::Urgency,
        Self::Category,
        Self::Keywords,
        Self::DateCreated,
        Self::TimeCreated,
        Self::Byline,
        Self::BylineTitle,
        Self::City,
        Self::Headline,
        Self::Credit,
        Self::Source,
        Self::CopyrightNotice,
        Self::Contact,
        Self::Caption,
        Self::WriterEditor,
        Self::OwnerId,
        Self::Notes,
    ];

    /// Short name used in the reader mapping
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::ObjectName => "name",
            Self::EditStatus => "editstatus",
            Self::Urgency => "urgency",
            Self::Category => "category",
            Self::Keywords => "keywords",
            Self::DateCreated => "datecreated",
            Self::TimeCreated => "timecreated",
            Self::Byline => "byline",
            Self::BylineTitle => "jobtitle",
            Self::City => "city",
            Self::Headline => "headline",
            Self::Credit => "credit",
            Self::Source => "source",
            Self::CopyrightNotice => "copyright",
            Self::Contact => "contact",
            Self::Caption => "caption",
            Self::WriterEditor => "writeeditor",
            Self::OwnerId => "ownerid",
            Self::Notes => "notes",
            Self::Unknown(_) => return None,
        })
    }

    /// Maximum number of value bytes
    pub fn max_length(self) -> Option<usize> {
        Some(match self {
            Self::ObjectName | Self::EditStatus | Self::Keywords => 64,
            Self::Urgency => 1,
            Self::Category => 3,
            Self::DateCreated => 8,
            Self::TimeCreated => 11,
            Self::Byline
            | Self::BylineTitle
            | Self::City
            | Self::Credit
            | Self::Source
            | Self::WriterEditor => 32,
            Self::Headline => 256,
            Self::CopyrightNotice | Self::Contact | Self::OwnerId => 128,
            Self::Caption => 2000,
            Self::Notes => 1024,
            Self::Unknown(_) => return None,
        })
    }

    /// ```
    /// # use pictag_iptc::Dataset;
    /// assert_eq!(Dataset::from_name("caption"), Some(Dataset::Caption));
    /// assert_eq!(Dataset::from_name("title"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMED.into_iter().find(|x| x.name() == Some(name))
    }

    pub fn number(self) -> u8 {
        self.into()
    }

    pub fn code(self) -> DatasetCode {
        DatasetCode::new(APPLICATION_RECORD, self.number())
    }
}

/// Record and dataset number of a record
///
/// Written as `record#dataset` with a three digit dataset number.
///
/// ```
/// # use pictag_iptc::{Dataset, DatasetCode};
/// assert_eq!(Dataset::ObjectName.code().to_string(), "2#005");
/// assert_eq!("2#120".parse(), Ok(Dataset::Caption.code()));
/// assert!("2-120".parse::<DatasetCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetCode {
    pub record: u8,
    pub dataset: u8,
}

impl DatasetCode {
    /// Coded character set declaration in the envelope record
    pub const CODED_CHARACTER_SET: Self = Self::new(1, 90);

    pub const fn new(record: u8, dataset: u8) -> Self {
        Self { record, dataset }
    }

    /// Named dataset if this code belongs to the application record
    pub fn application_dataset(self) -> Option<Dataset> {
        (self.record == APPLICATION_RECORD).then(|| Dataset::from(self.dataset))
    }
}

impl From<Dataset> for DatasetCode {
    fn from(value: Dataset) -> Self {
        value.code()
    }
}

impl std::fmt::Display for DatasetCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{:03}", self.record, self.dataset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid dataset code '{0}'")]
pub struct InvalidDatasetCode(pub String);

impl std::str::FromStr for DatasetCode {
    type Err = InvalidDatasetCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidDatasetCode(s.to_string());
        let (record, dataset) = s.split_once('#').ok_or_else(err)?;

        Ok(Self {
            record: record.parse().map_err(|_| err())?,
            dataset: dataset.parse().map_err(|_| err())?,
        })
    }
}
