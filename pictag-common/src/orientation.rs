crate::utils::maybe_convertible_enum!(
    #[repr(u16)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Operations that have to be applied to show the image upright
    ///
    /// The discriminants are the values of the Exif `Orientation` tag.
    pub enum Orientation {
        #[default]
        Normal = 1,
        MirrorHorizontal = 2,
        Rotate180 = 3,
        MirrorVertical = 4,
        MirrorHorizontalRotate270 = 5,
        Rotate90 = 6,
        MirrorHorizontalRotate90 = 7,
        Rotate270 = 8,
    }
);

impl Orientation {
    /// Combine a clockwise rotation with an optional horizontal mirroring
    ///
    /// ```
    /// # use pictag_common::orientation::*;
    /// assert_eq!(Orientation::new(Rotation::_90, false), Orientation::Rotate90);
    /// assert_eq!(Orientation::new(Rotation::_180, true), Orientation::MirrorVertical);
    /// ```
    pub fn new(rotation: Rotation, mirrored: bool) -> Self {
        match (mirrored, rotation) {
            (false, Rotation::_0) => Self::Normal,
            (false, Rotation::_90) => Self::Rotate90,
            (false, Rotation::_180) => Self::Rotate180,
            (false, Rotation::_270) => Self::Rotate270,
            (true, Rotation::_0) => Self::MirrorHorizontal,
            (true, Rotation::_90) => Self::MirrorHorizontalRotate90,
            (true, Rotation::_180) => Self::MirrorVertical,
            (true, Rotation::_270) => Self::MirrorHorizontalRotate270,
        }
    }

    /// Parse the textual value of an Exif `Orientation` tag
    ///
    /// Returns `None` for anything that is not an integer from 1 to 8.
    ///
    /// ```
    /// # use pictag_common::orientation::Orientation;
    /// assert_eq!(Orientation::from_exif_str(" 6 "), Some(Orientation::Rotate90));
    /// assert_eq!(Orientation::from_exif_str("9"), None);
    /// assert_eq!(Orientation::from_exif_str("up"), None);
    /// ```
    pub fn from_exif_str(value: &str) -> Option<Self> {
        let value: u16 = value.trim().parse().ok()?;
        Self::try_from(value).ok()
    }

    /// Value as stored in the Exif `Orientation` tag
    pub fn exif_value(self) -> u16 {
        self.into()
    }

    /// Image has to be mirrored horizontally before rotating
    pub fn mirror(self) -> bool {
        matches!(
            self,
            Self::MirrorHorizontal
                | Self::MirrorVertical
                | Self::MirrorHorizontalRotate270
                | Self::MirrorHorizontalRotate90
        )
    }

    /// Clockwise rotation to apply after mirroring
    pub fn rotate(self) -> Rotation {
        match self {
            Self::Normal | Self::MirrorHorizontal => Rotation::_0,
            Self::Rotate90 | Self::MirrorHorizontalRotate90 => Rotation::_90,
            Self::Rotate180 | Self::MirrorVertical => Rotation::_180,
            Self::Rotate270 | Self::MirrorHorizontalRotate270 => Rotation::_270,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::MirrorHorizontal => "mirror horizontal",
            Self::Rotate180 => "rotate 180",
            Self::MirrorVertical => "mirror vertical",
            Self::MirrorHorizontalRotate270 => "mirror horizontal and rotate 270 clockwise",
            Self::Rotate90 => "rotate 90 clockwise",
            Self::MirrorHorizontalRotate90 => "mirror horizontal and rotate 90 clockwise",
            Self::Rotate270 => "rotate 270 clockwise",
        };
        f.write_str(s)
    }
}

/// Clockwise rotation in multiples of 90 degrees
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    _0,
    _90,
    _180,
    _270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::_0 => 0,
            Rotation::_90 => 90,
            Rotation::_180 => 180,
            Rotation::_270 => 270,
        }
    }
}
