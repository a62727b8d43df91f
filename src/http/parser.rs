use std::time::Duration;

use anyhow::Context;
use tokio::io::AsyncBufRead;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::http::lines::LineReader;
use crate::http::request::Request;

/// Longest request line accepted, excluding the terminator.
pub const MAX_LINE_LEN: usize = 8192;

const RETRIEVAL_METHOD: &str = "GET";

/// What a single request line means for the read loop.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Header line we don't care about; keep reading.
    Ignored,
    /// A `GET` line; record the path and keep reading.
    Target(String),
    /// A `GET` line with no version token. The path is kept but the
    /// request is over.
    LastTarget(String),
    /// Blank, short or otherwise unusable line. Stop reading.
    End,
}

/// Classifies one line of the request head, terminator already removed.
pub fn parse_line(line: &str) -> LineOutcome {
    if line.chars().count() < RETRIEVAL_METHOD.len() {
        return LineOutcome::End;
    }

    if !line.starts_with(RETRIEVAL_METHOD) {
        return LineOutcome::Ignored;
    }

    // Skip the separator after the method, whatever it is.
    let mut rest = line[RETRIEVAL_METHOD.len()..].chars();
    if rest.next().is_none() {
        return LineOutcome::End;
    }
    let candidate = rest.as_str();

    match candidate.find(' ') {
        Some(end) => LineOutcome::Target(candidate[..end].to_string()),
        None => LineOutcome::LastTarget(candidate.to_string()),
    }
}

/// Reads the request head from `reader` until a blank line, end of stream,
/// an unusable line or `idle_timeout` of silence.
///
/// Only an I/O failure on the stream is an error. Everything else yields
/// whatever target has been seen so far, possibly the placeholder.
pub async fn read_request<R>(reader: &mut R, idle_timeout: Duration) -> anyhow::Result<Request>
where
    R: AsyncBufRead + Unpin,
{
    let mut request = Request::default();
    let mut lines = LineReader::new(reader);
    let mut buf = Vec::with_capacity(256);

    loop {
        let read = match timeout(idle_timeout, lines.read_line(&mut buf, MAX_LINE_LEN)).await {
            Ok(res) => res.context("Failed to read request line")?,
            Err(_) => {
                debug!(timeout = ?idle_timeout, "Idle timeout while reading request");
                break;
            }
        };

        if !read {
            break;
        }

        if buf.len() > MAX_LINE_LEN {
            warn!(limit = MAX_LINE_LEN, "Request line too long");
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        debug!(line = %line, "Request line");

        match parse_line(&line) {
            LineOutcome::Ignored => {}
            LineOutcome::Target(path) => request = Request::new(path),
            LineOutcome::LastTarget(path) => {
                request = Request::new(path);
                break;
            }
            LineOutcome::End => break,
        }
    }

    debug!(
        path = %request.target_path,
        placeholder = request.is_placeholder(),
        "Request parsed"
    );

    Ok(request)
}
