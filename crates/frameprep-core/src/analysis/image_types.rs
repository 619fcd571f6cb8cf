/// Image file qualification based on file name extensions.
///
/// A file qualifies when its name ends, case-insensitively, with `.` plus
/// one of [`IMAGE_EXTENSIONS`]. Only the name is inspected; content is
/// never opened.
use crate::config::IMAGE_EXTENSIONS;

/// Return the recognised image extension of `name`, as written in the name.
///
/// The dot is required: a file literally called `jpg` has no extension.
/// A dot-file such as `.png` does qualify, because its name still ends
/// with `.png`.
pub fn image_extension(name: &str) -> Option<&str> {
    let (_, ext) = name.rsplit_once('.')?;
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
        .then_some(ext)
}

/// Whether `name` is counted as an image file.
#[inline]
pub fn is_qualifying_image(name: &str) -> bool {
    image_extension(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_extensions_qualify() {
        for name in &["a.jpg", "b.jpeg", "c.png", "d.gif", "e.webp"] {
            assert!(is_qualifying_image(name), "expected {name} to qualify");
        }
    }

    /// Extension matching must be case-insensitive so "JPG" == "jpg".
    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_qualifying_image("a.JPG"));
        assert!(is_qualifying_image("Frame.WebP"));
        assert_eq!(image_extension("x.PNG"), Some("PNG"));
    }

    #[test]
    fn other_extensions_are_rejected() {
        for name in &["c.txt", "Thumbs.db", "photo.bmp", "photo.jpg.bak", "archive.zip"] {
            assert!(!is_qualifying_image(name), "expected {name} to be rejected");
        }
    }

    #[test]
    fn dot_is_required() {
        assert!(!is_qualifying_image("jpg"));
        assert!(!is_qualifying_image("thumbnailpng"));
        assert!(!is_qualifying_image(""));
    }

    #[test]
    fn dot_file_with_image_suffix_qualifies() {
        assert!(is_qualifying_image(".png"));
    }

    /// Only the last extension counts.
    #[test]
    fn double_extension_uses_last_segment() {
        assert!(is_qualifying_image("backup.txt.jpeg"));
    }
}
