//! Charset detection for fetched markup.
//!
//! Pages are decoded with the first encoding found among: a byte order mark,
//! the `charset` parameter of the `Content-Type` header, a `charset`
//! declaration in the first 1024 bytes of the markup, and finally a
//! statistical guess over the whole body. Chinese sites still serve GBK with
//! only a `<meta charset>` to say so.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Bytes scanned for a `charset` declaration, as in the HTML prescan.
const PRESCAN_LIMIT: usize = 1024;

/// Decodes `bytes` to text; malformed sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use wordlens_core::decode_markup;
///
/// let (gbk, _, _) = encoding_rs::GBK.encode("<meta charset=\"gbk\"><p>苹果</p>");
/// assert_eq!(decode_markup(&gbk, None), "<meta charset=\"gbk\"><p>苹果</p>");
/// ```
pub fn decode_markup(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(bytes, content_type);
    let (text, used, had_errors) = encoding.decode(bytes);

    tracing::debug!(encoding = used.name(), had_errors, bytes = bytes.len(), "decoded markup");

    text.into_owned()
}

/// Picks the encoding `bytes` should be decoded with.
pub fn detect_encoding(bytes: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if let Some(encoding) = content_type.and_then(charset_label).and_then(for_label) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(PRESCAN_LIMIT)]).to_ascii_lowercase();
    if let Some(encoding) = charset_label(&head).and_then(for_label) {
        return encoding;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Resolves a label; a declared UTF-16 is treated as UTF-8 like browsers do.
fn for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.as_bytes()).map(Encoding::output_encoding)
}

/// Value of the first `charset=<label>` in `text`.
fn charset_label(text: &str) -> Option<&str> {
    let mut rest = text;

    while let Some(pos) = find_ignore_case(rest, "charset") {
        rest = &rest[pos + "charset".len()..];
        let after = rest.trim_start();
        let Some(value) = after.strip_prefix('=') else {
            continue;
        };

        let value = value.trim_start().trim_start_matches(['"', '\'']);
        let end = value
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')))
            .unwrap_or(value.len());
        if end > 0 {
            return Some(&value[..end]);
        }
    }

    None
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
