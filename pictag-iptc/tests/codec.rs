use pictag_iptc::codec::{decode_record, encode_record, EXTENDED_LENGTH_THRESHOLD};
use pictag_iptc::{Error, Malformation};

#[test]
fn length_form_threshold() {
    let cases = [
        (0, vec![0x00, 0x00]),
        (1, vec![0x00, 0x01]),
        (0x7FFF, vec![0x7F, 0xFF]),
        (0x8000, vec![0x80, 0x04, 0x00, 0x00, 0x80, 0x00]),
        (0x12345, vec![0x80, 0x04, 0x00, 0x01, 0x23, 0x45]),
    ];

    for (len, length_field) in cases {
        let value = vec![b'x'; len];
        let encoded = encode_record(2, 120, &value).unwrap();

        assert_eq!(&encoded[..3], &[0x1C, 2, 120], "header for {len}");
        let header_end = 3 + length_field.len();
        assert_eq!(&encoded[3..header_end], length_field.as_slice(), "length for {len}");
        assert_eq!(&encoded[header_end..], value.as_slice());

        let (record, consumed) = decode_record(&encoded, 0).unwrap();
        assert_eq!(consumed, encoded.len());
        assert_eq!(record.value.len(), len);
    }

    assert_eq!(EXTENDED_LENGTH_THRESHOLD, 32768);
}

#[test]
fn decode_at_offset() {
    let mut data = encode_record(2, 5, b"first").unwrap();
    let second = encode_record(2, 25, b"second").unwrap();
    data.extend_from_slice(&second);

    let (record, consumed) = decode_record(&data, 10).unwrap();
    assert_eq!(consumed, second.len());
    assert_eq!(record.record_number, 2);
    assert_eq!(record.dataset_number, 25);
    assert_eq!(record.value, b"second");
}

#[test]
fn decode_empty() {
    assert_eq!(decode_record(&[], 0), Err(Error::TruncatedBlob { offset: 0 }));
}

#[test]
fn decode_cut_everywhere() {
    let data = encode_record(2, 120, b"Caption text").unwrap();

    for cut in 0..data.len() {
        let err = decode_record(&data[..cut], 0).unwrap_err();
        assert_eq!(err, Error::TruncatedBlob { offset: 0 }, "cut at {cut}");
    }
}

#[test]
fn decode_cut_extended() {
    let data = encode_record(2, 120, &vec![0; 0x9000]).unwrap();

    for cut in [4, 6, 8, 9, 100, data.len() - 1] {
        let err = decode_record(&data[..cut], 0).unwrap_err();
        assert_eq!(err, Error::TruncatedBlob { offset: 0 }, "cut at {cut}");
    }
}

#[test]
fn decode_missing_marker() {
    let err = decode_record(&[0x1D, 2, 5, 0, 0], 0).unwrap_err();
    assert_eq!(
        err,
        Error::MalformedRecord {
            offset: 0,
            reason: Malformation::MissingMarker(0x1D)
        }
    );
}

#[test]
fn decode_wrong_extended_length_size() {
    let err = decode_record(&[0x1C, 2, 5, 0x80, 0x02, 0, 1, b'a'], 0).unwrap_err();
    assert_eq!(
        err,
        Error::MalformedRecord {
            offset: 0,
            reason: Malformation::ExtendedLengthSize(2)
        }
    );
}

#[test]
fn decode_offset_outside() {
    let data = encode_record(2, 5, b"a").unwrap();

    assert!(matches!(
        decode_record(&data, 100),
        Err(Error::MalformedRecord {
            reason: Malformation::OffsetOutOfBounds,
            ..
        })
    ));
    assert_eq!(
        decode_record(&data, data.len()),
        Err(Error::TruncatedBlob { offset: data.len() })
    );
}

#[test]
fn declared_length_beyond_blob() {
    // Extended length claims 4 GiB
    let data = [0x1C, 2, 5, 0x80, 0x04, 0xFF, 0xFF, 0xFF, 0xFF, b'a'];
    assert_eq!(
        decode_record(&data, 0),
        Err(Error::TruncatedBlob { offset: 0 })
    );
}
