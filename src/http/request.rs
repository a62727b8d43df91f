/// Target used when no `GET` line was seen. No file by this name is
/// expected to exist, so it resolves to a 404.
pub const PLACEHOLDER_TARGET: &str = " ";

/// Represents a parsed HTTP request from a client.
///
/// Only the requested path is kept; every other header line is read and
/// dropped by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The path exactly as it appeared on the request line (e.g. "/index.html")
    pub target_path: String,
}

impl Request {
    pub fn new(target_path: impl Into<String>) -> Self {
        Self {
            target_path: target_path.into(),
        }
    }

    /// True when no `GET` line supplied a target.
    pub fn is_placeholder(&self) -> bool {
        self.target_path == PLACEHOLDER_TARGET
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new(PLACEHOLDER_TARGET)
    }
}
