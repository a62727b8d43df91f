use chrono::Utc;

use crate::http::mime::ContentType;
use crate::http::resource::Resource;

/// Identity sent in the `Server` header.
pub const SERVER_NAME: &str = "Jon's very own server";

const HTTP_VERSION: &str = "HTTP/1.1";

/// HTTP status codes the file server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use file_server::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// The head of a response: status line plus the four fixed fields.
#[derive(Debug, Clone)]
pub struct ResponseHeader {
    pub status: StatusCode,
    /// Already formatted as an HTTP-date
    pub date: String,
    pub server: &'static str,
    pub content_type: ContentType,
}

impl ResponseHeader {
    /// Builds the header for a resolved resource. The status depends only on
    /// whether the file was found, never on the content type.
    pub fn for_resource(resource: &Resource, content_type: ContentType) -> Self {
        let status = if resource.is_found() {
            StatusCode::Ok
        } else {
            StatusCode::NotFound
        };

        Self {
            status,
            date: http_date(),
            server: SERVER_NAME,
            content_type,
        }
    }

    pub fn status_line(&self) -> String {
        format!(
            "{} {} {}",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase()
        )
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.extend_from_slice(self.status_line().as_bytes());
        buf.extend_from_slice(b"\n");

        let fields = [
            ("Date", self.date.as_str()),
            ("Server", self.server),
            ("Connection", "close"),
            ("Content-Type", self.content_type.as_str()),
        ];
        for (k, v) in fields {
            buf.extend_from_slice(k.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(v.as_bytes());
            buf.extend_from_slice(b"\n");
        }

        // Header/body separator
        buf.extend_from_slice(b"\n");

        buf
    }
}

fn http_date() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
