//! Domain Services
//!
//! Pure validation logic for uploaded project files.
//!
//! Extension checks alone are trivially spoofed, so the content is also
//! sniffed against the magic signature expected for the extension.

/// Extract the lowercased extension from a filename
///
/// Returns `None` when there is no dot or the extension is empty.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Check whether an extension is in the allowed set
pub fn extension_allowed(ext: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|a| a.eq_ignore_ascii_case(ext))
}

/// Check whether file bytes plausibly match the claimed extension
///
/// - `pdf`  - must start with `%PDF-`
/// - `doc`  - OLE2 compound document header
/// - `docx` - ZIP local file header (`PK\x03\x04`)
/// - `txt`  - no NUL bytes in the leading window
///
/// Unknown extensions pass; the allow-list has already rejected them.
pub fn content_matches_extension(ext: &str, data: &[u8]) -> bool {
    match ext {
        "pdf" => data.starts_with(b"%PDF-"),
        "doc" => data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
        "docx" => data.starts_with(b"PK\x03\x04"),
        "txt" => !data.iter().take(1024).any(|&b| b == 0),
        _ => true,
    }
}

/// Reduce an uploaded filename to a safe form
///
/// Strips any path components, replaces characters outside
/// `[A-Za-z0-9._-]` with `_`, and refuses to produce hidden files.
/// Returns `None` when nothing safe remains.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    // Last path component only, for both separator styles
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
