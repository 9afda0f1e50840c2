//! Absolute URLs for documents held on the file server.
//!
//! Records store the document as a path relative to the file server root.
//! Responses rewrite it to an absolute URL; the stored value never changes.

/// Prefix a stored relative document path with the file server base URL.
///
/// A single slash is kept at the seam when both sides carry one. Paths that
/// are already absolute (`http://`, `https://`) are returned unchanged.
#[must_use]
pub fn absolute_document_url(base_url: &str, document: &str) -> String {
    if document.starts_with("http://") || document.starts_with("https://") {
        return document.to_string();
    }
    match (base_url.ends_with('/'), document.starts_with('/')) {
        (true, true) => format!("{base_url}{}", &document[1..]),
        _ => format!("{base_url}{document}"),
    }
}
