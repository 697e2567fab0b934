//! Photo selection helpers: image detection and data-URL previews.

use api::PhotoUpload;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Whether a MIME type names an image.
pub fn is_image(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("image/")
}

/// Best guess at an image MIME type from a file name, for browsers that report none.
pub fn guess_content_type(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

/// `data:<mime>;base64,<bytes>` for rendering a local preview.
pub fn data_url(photo: &PhotoUpload) -> String {
    format!(
        "data:{};base64,{}",
        photo.content_type,
        STANDARD.encode(&photo.bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image() {
        assert!(is_image("image/png"));
        assert!(is_image("Image/JPEG"));
        assert!(!is_image("application/pdf"));
        assert!(!is_image(""));
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type("me.PNG"), Some("image/png"));
        assert_eq!(guess_content_type("holiday.jpeg"), Some("image/jpeg"));
        assert_eq!(guess_content_type("notes.txt"), None);
        assert_eq!(guess_content_type("no-extension"), None);
    }

    #[test]
    fn test_data_url() {
        let photo = PhotoUpload {
            file_name: "dot.gif".into(),
            content_type: "image/gif".into(),
            bytes: b"GIF89a".to_vec(),
        };
        assert_eq!(data_url(&photo), "data:image/gif;base64,R0lGODlh");
    }
}
