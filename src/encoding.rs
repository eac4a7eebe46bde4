//! Character encoding detection and transcoding.
//!
//! Byte input is decoded before parsing: a byte order mark wins, then a
//! charset declared in a `<meta>` tag near the top of the document, then
//! UTF-8.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LENGTH: usize = 1024;

/// Detect the character encoding of HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LENGTH)]);
    declared_encoding(&head).unwrap_or(UTF_8)
}

/// Encoding declared by `<meta charset>`, or failing that by a `Content-Type`
/// `http-equiv` tag. A declaration with an unknown label is skipped.
fn declared_encoding(head: &str) -> Option<&'static Encoding> {
    [&*CHARSET_META, &*CONTENT_TYPE_CHARSET].iter().find_map(|re| {
        re.captures(head)
            .and_then(|c| c.get(1))
            .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
    })
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use seize::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("malformed {} input replaced with U+FFFD", encoding.name());
    }
    decoded.into_owned()
}
