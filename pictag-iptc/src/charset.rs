/// Value of the coded character set dataset (1#090) that declares UTF-8
pub const UTF8_DECLARATION: &[u8] = b"\x1b%G";

/// Decode a text value
///
/// Without a UTF-8 declaration, values that are not valid UTF-8 are treated
/// as Windows-1252, which is what most legacy IPTC writers produce.
pub(crate) fn decode_text(value: &[u8], declared_utf8: bool) -> String {
    if declared_utf8 {
        return String::from_utf8_lossy(value).into_owned();
    }

    match std::str::from_utf8(value) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (s, had_errors) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(value);
            if had_errors {
                tracing::debug!("Value not decodable as Windows-1252: {value:x?}");
            }
            s.into_owned()
        }
    }
}
