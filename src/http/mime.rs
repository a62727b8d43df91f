/// Fallback type for anything not in the image table.
pub const TEXT_HTML: &str = "text/html";

const IMAGE_TYPES: [(&str, &str); 3] = [
    (".jpg", "image/jpg"),
    (".gif", "image/gif"),
    (".png", "image/png"),
];

/// The content type chosen for a request, decided once from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentType {
    mime_type: &'static str,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        self.mime_type
    }

    /// Images are streamed as raw bytes; everything else goes through
    /// template expansion.
    pub fn is_binary(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Maps a request path to its content type by suffix (case-sensitive).
///
/// ```
/// # use file_server::http::mime::classify;
/// assert_eq!(classify("/logo.png").as_str(), "image/png");
/// assert_eq!(classify("/LOGO.PNG").as_str(), "text/html");
/// ```
pub fn classify(path: &str) -> ContentType {
    let mime_type = IMAGE_TYPES
        .iter()
        .find(|(suffix, _)| path.ends_with(suffix))
        .map(|(_, mime)| *mime)
        .unwrap_or(TEXT_HTML);

    ContentType { mime_type }
}
