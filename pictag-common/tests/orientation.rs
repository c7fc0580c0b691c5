use pictag_common::orientation::{Orientation, Rotation};

#[test]
fn exif_values() {
    let table = [
        (1_u16, Orientation::Normal, false, 0),
        (2, Orientation::MirrorHorizontal, true, 0),
        (3, Orientation::Rotate180, false, 180),
        (4, Orientation::MirrorVertical, true, 180),
        (5, Orientation::MirrorHorizontalRotate270, true, 270),
        (6, Orientation::Rotate90, false, 90),
        (7, Orientation::MirrorHorizontalRotate90, true, 90),
        (8, Orientation::Rotate270, false, 270),
    ];

    for (value, orientation, mirror, degrees) in table {
        assert_eq!(Orientation::try_from(value), Ok(orientation));
        assert_eq!(orientation.exif_value(), value);
        assert_eq!(orientation.mirror(), mirror, "{orientation}");
        assert_eq!(orientation.rotate().degrees(), degrees, "{orientation}");
        assert_eq!(
            Orientation::new(orientation.rotate(), orientation.mirror()),
            orientation
        );
    }

    assert!(Orientation::try_from(0_u16).is_err());
    assert!(Orientation::try_from(9_u16).is_err());
}

#[test]
fn default_is_normal() {
    assert_eq!(Orientation::default(), Orientation::Normal);
    assert_eq!(Orientation::default().rotate(), Rotation::_0);
    assert!(!Orientation::default().mirror());
}
