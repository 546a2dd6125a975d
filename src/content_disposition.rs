//! Content-Disposition values for a share file.
//!
//! A share file stores its Content-Disposition as an opaque string. These
//! helpers read the filename out of a stored value and build values to stage
//! (RFC 6266, with RFC 5987 extended filenames).

use std::fmt;

/// A parsed or to-be-rendered Content-Disposition value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDisposition {
    /// The disposition type, lower-cased (e.g., "attachment", "inline").
    pub disposition_type: String,
    /// The filename parameter, if present.
    pub filename: Option<String>,
}

impl ContentDisposition {
    /// An `attachment` disposition carrying `filename`.
    pub fn attachment(filename: impl Into<String>) -> Self {
        Self {
            disposition_type: "attachment".to_string(),
            filename: Some(filename.into()),
        }
    }

    /// A bare `inline` disposition.
    pub fn inline() -> Self {
        Self {
            disposition_type: "inline".to_string(),
            filename: None,
        }
    }

    /// Parse a stored value. Returns `None` for an empty value.
    ///
    /// `filename*` takes precedence over `filename` when both are present.
    /// Its value is decoded as ISO-8859-1 when labelled so, otherwise as UTF-8.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        let mut parts = split_params(value).into_iter();
        let disposition_type = parts.next().unwrap_or(value);

        let mut filename = None;
        let mut filename_ext = None;

        for param in parts.map(str::trim).filter(|p| !p.is_empty()) {
            let Some((key, raw)) = param.split_once('=') else {
                continue;
            };
            match key.trim().to_ascii_lowercase().as_str() {
                "filename" => filename = Some(unquote(raw.trim()).to_string()),
                // charset'language'percent-encoded
                "filename*" => {
                    let mut ext = raw.trim().splitn(3, '\'');
                    if let (Some(charset), Some(_), Some(encoded)) =
                        (ext.next(), ext.next(), ext.next())
                    {
                        filename_ext = Some(decode_charset(charset, &percent_decode(encoded)));
                    }
                }
                _ => {}
            }
        }

        Some(Self {
            disposition_type: disposition_type.trim().to_ascii_lowercase(),
            filename: filename_ext.or(filename),
        })
    }
}

impl fmt::Display for ContentDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.disposition_type)?;
        if let Some(name) = &self.filename {
            if is_plain_token(name) {
                write!(f, "; filename=\"{}\"", name)?;
            } else {
                let fallback: String = name
                    .chars()
                    .map(|c| if is_plain_char(c) { c } else { '_' })
                    .collect();
                write!(
                    f,
                    "; filename=\"{}\"; filename*=UTF-8''{}",
                    fallback,
                    percent_encode(name)
                )?;
            }
        }
        Ok(())
    }
}

fn is_plain_char(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\'
}

fn is_plain_token(s: &str) -> bool {
    s.chars().all(is_plain_char)
}

/// Split on `;` outside of quoted strings.
fn split_params(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in value.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                parts.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

fn percent_decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let decoded = std::str::from_utf8(&bytes[i + 1..i + 3])
                .ok()
                .and_then(|h| u8::from_str_radix(h, 16).ok());
            if let Some(byte) = decoded {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    out
}

fn decode_charset(charset: &str, bytes: &[u8]) -> String {
    if charset.eq_ignore_ascii_case("iso-8859-1") || charset.eq_ignore_ascii_case("latin1") {
        // ISO-8859-1 bytes map one-to-one onto U+0000..U+00FF.
        bytes.iter().map(|&b| char::from(b)).collect()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

// RFC 5987 attr-char: ALPHA / DIGIT / "!#$&+-.^_`|~"
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if b.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}
