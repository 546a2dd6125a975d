//! Content-type detection for content staged from a local source.
//!
//! Detection strategy (in priority order):
//! 1. `infer` crate - magic byte detection for binary formats
//! 2. Markup sniffing for SVG, XML and HTML, which `infer` does not cover
//! 3. `mime_guess` crate - extension-based fallback from the file name

/// Detect a content type from the leading bytes of the content, falling back
/// to the file name. Returns `None` when nothing matches.
pub fn detect_content_type(head: &[u8], filename: Option<&str>) -> Option<String> {
    if let Some(kind) = infer::get(head) {
        let mime = kind.mime_type();
        if mime != "text/xml" && mime != "application/xml" {
            return Some(mime.to_string());
        }
        // Markup sniffing can tell SVG from generic XML.
        return Some(sniff_markup(head).unwrap_or(mime).to_string());
    }

    if let Some(mime) = sniff_markup(head) {
        return Some(mime.to_string());
    }

    filename.and_then(content_type_from_filename)
}

/// Guess a content type from a file name's extension.
pub fn content_type_from_filename(filename: &str) -> Option<String> {
    mime_guess::from_path(filename)
        .first()
        .map(|m| m.essence_str().to_string())
}

fn sniff_markup(head: &[u8]) -> Option<&'static str> {
    let prefix = &head[..head.len().min(4096)];
    let text = match std::str::from_utf8(prefix) {
        Ok(s) => s,
        // A multi-byte character may straddle the cut.
        Err(e) => std::str::from_utf8(&prefix[..e.valid_up_to()]).ok()?,
    };
    let trimmed = text.trim_start();

    if trimmed.starts_with("<svg") || (trimmed.starts_with("<?xml") && trimmed.contains("<svg")) {
        return Some("image/svg+xml");
    }
    let lower = trimmed
        .get(..trimmed.len().min(15))
        .unwrap_or(trimmed)
        .to_ascii_lowercase();
    if lower.starts_with("<!doctype html") || lower.starts_with("<html") {
        return Some("text/html");
    }
    if trimmed.starts_with("<?xml") || trimmed.starts_with("<!DOCTYPE") {
        return Some("application/xml");
    }
    None
}
