//! Response body streaming.
//!
//! Images are copied byte for byte. Text files are copied line by line with
//! two template lines expanded: a line that is exactly `<cs371date>` gets the
//! current local time written in front of it, and a line that is exactly
//! `<cs371server>` gets the server's name. The token line itself is still
//! written afterwards, and line terminators are not written at all.

use std::fmt::Display;

use anyhow::Context;
use chrono::{DateTime, Local, TimeZone};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::lines::LineReader;
use crate::http::mime::ContentType;
use crate::http::resource::Resource;

/// Body sent when the target does not resolve to a file.
pub const NOT_FOUND_BODY: &str = "<h3>Error: 404 not Found</h3>";

/// Text written in front of a `<cs371server>` line.
pub const SERVER_SIGNATURE: &str = "Farouk's Server.";

/// `07/03/24 13:45:02`
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    Date,
    Server,
}

impl TemplateToken {
    pub fn literal(&self) -> &'static str {
        match self {
            TemplateToken::Date => "<cs371date>",
            TemplateToken::Server => "<cs371server>",
        }
    }

    /// Recognises a token only when it is the whole line.
    pub fn from_line(line: &[u8]) -> Option<Self> {
        [TemplateToken::Date, TemplateToken::Server]
            .into_iter()
            .find(|t| t.literal().as_bytes() == line)
    }

    pub fn expansion(&self) -> String {
        match self {
            TemplateToken::Date => render_timestamp(&Local::now()),
            TemplateToken::Server => SERVER_SIGNATURE.to_string(),
        }
    }
}

pub fn render_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Writes the body for `resource` and returns the number of bytes sent.
pub async fn write_body<W>(
    stream: &mut W,
    resource: Resource,
    content_type: ContentType,
) -> anyhow::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    match resource {
        Resource::Missing => {
            stream
                .write_all(NOT_FOUND_BODY.as_bytes())
                .await
                .context("Failed to write not-found body")?;
            Ok(NOT_FOUND_BODY.len() as u64)
        }
        Resource::Found { mut file, path, .. } if content_type.is_binary() => {
            tokio::io::copy(&mut file, stream)
                .await
                .with_context(|| format!("Failed to stream {}", path.display()))
        }
        Resource::Found { file, path, .. } => expand_templates(BufReader::new(file), stream)
            .await
            .with_context(|| format!("Failed to stream {}", path.display())),
    }
}

/// Copies `reader` to `stream` line by line, expanding template lines.
pub async fn expand_templates<R, W>(reader: R, stream: &mut W) -> anyhow::Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = LineReader::new(reader);
    let mut line = Vec::new();
    let mut written = 0u64;

    while lines.read_line(&mut line, usize::MAX).await? {
        if let Some(token) = TemplateToken::from_line(&line) {
            let expansion = token.expansion();
            stream.write_all(expansion.as_bytes()).await?;
            written += expansion.len() as u64;
        }

        stream.write_all(&line).await?;
        written += line.len() as u64;
    }

    Ok(written)
}
