use mime::Mime;

/// Coarse content sniffing for uploaded logs.
///
/// Empty buffers are `application/x-empty`. Anything containing NUL or C0
/// control bytes other than common whitespace, backspace and ESC is
/// `application/octet-stream`. Everything else, including UTF-8 and
/// single-byte encodings, is `text/plain`.
pub fn sniff(content: &[u8]) -> Mime {
    if content.is_empty() {
        return "application/x-empty"
            .parse()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
    }
    if content.iter().any(|b| is_binary_byte(*b)) {
        return mime::APPLICATION_OCTET_STREAM;
    }
    mime::TEXT_PLAIN
}

pub fn is_plain_text(content: &[u8]) -> bool {
    sniff(content) == mime::TEXT_PLAIN
}

fn is_binary_byte(b: u8) -> bool {
    match b {
        b'\t' | b'\n' | b'\r' | 0x08 | 0x0b | 0x0c | 0x1b => false,
        0x00..=0x1f | 0x7f => true,
        _ => false,
    }
}
