/// Point in time a picture was taken
///
/// Exif date fields carry no time zone and are kept as [`DateTime::Naive`].
/// IPTC date and time fields include an offset and are reconciled into an
/// absolute [`DateTime::Utc`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTime {
    Utc(chrono::DateTime<chrono::Utc>),
    Naive(chrono::NaiveDateTime),
}

impl DateTime {
    /// Seconds since the Unix epoch
    ///
    /// Naive values are interpreted as UTC.
    ///
    /// ```
    /// # use pictag_common::datetime::DateTime;
    /// let naive = chrono::NaiveDate::from_ymd_opt(1970, 1, 2)
    ///     .unwrap()
    ///     .and_hms_opt(0, 0, 0)
    ///     .unwrap();
    /// assert_eq!(DateTime::Naive(naive).timestamp(), 86400);
    /// ```
    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Utc(d) => d.timestamp(),
            Self::Naive(d) => d.and_utc().timestamp(),
        }
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utc(d) => write!(f, "{}", d),
            Self::Naive(d) => write!(f, "{}", d),
        }
    }
}
