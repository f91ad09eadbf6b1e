//! Extension-based classification of catalog entries.
//!
//! The extension sets below are part of the public contract and must not
//! drift: clients filter on the resulting categories.

use vitrine_model::MediaCategory;

/// Image extensions (lowercase, without the leading dot)
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Video extensions
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "avi", "mkv"];

/// Document extensions
pub const DOCUMENT_EXTENSIONS: &[&str] =
    &["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt"];

/// Lowercased extension of `name`, if it has one.
///
/// The extension is whatever follows the final `.`. A dot in the first
/// position does not start an extension, so dotfiles like `.env` or `.png`
/// have none.
pub fn extension_of(name: &str) -> Option<String> {
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(name[idx + 1..].to_lowercase()),
        _ => None,
    }
}

/// Map a filename to its category. Total: every string has a category.
pub fn classify(name: &str) -> MediaCategory {
    let Some(ext) = extension_of(name) else {
        return MediaCategory::Other;
    };
    let ext = ext.as_str();

    if IMAGE_EXTENSIONS.contains(&ext) {
        MediaCategory::Image
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        MediaCategory::Video
    } else if DOCUMENT_EXTENSIONS.contains(&ext) {
        MediaCategory::Document
    } else {
        MediaCategory::Other
    }
}
