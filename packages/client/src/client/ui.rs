//! Terminal output for the client.

/// Render a server response for display.
///
/// The payload is opaque bytes; invalid UTF-8 sequences are replaced
/// rather than rejected, and a single trailing line terminator (CRLF or
/// LF) is dropped so the echo of a line-based server does not
/// double-space the terminal.
pub fn render_response(payload: &[u8]) -> String {
    let text = String::from_utf8_lossy(payload);
    match text.strip_suffix("\r\n").or_else(|| text.strip_suffix('\n')) {
        Some(stripped) => stripped.to_string(),
        None => text.into_owned(),
    }
}

/// Display a server response on the terminal.
pub fn display_response(payload: &[u8]) {
    println!("{}", render_response(payload));
}
