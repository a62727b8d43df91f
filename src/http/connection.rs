use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

use crate::config::Config;
use crate::http::content::write_body;
use crate::http::mime::classify;
use crate::http::parser::read_request;
use crate::http::resource::Resource;
use crate::http::response::ResponseHeader;
use crate::http::writer::write_header;

/// Serves exactly one request on an already accepted stream.
///
/// The stream is closed when the connection is dropped, which `run` does
/// on return.
pub struct Connection<S> {
    stream: BufReader<S>,
    root_dir: PathBuf,
    idle_timeout: Duration,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, cfg: &Config) -> Self {
        Self {
            stream: BufReader::new(stream),
            root_dir: cfg.root_dir.clone(),
            idle_timeout: cfg.idle_timeout(),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let request = read_request(&mut self.stream, self.idle_timeout)
            .await
            .context("Failed to read request")?;

        let content_type = classify(&request.target_path);
        let resource = Resource::resolve(&self.root_dir, &request.target_path).await;
        let header = ResponseHeader::for_resource(&resource, content_type);
        let file_len = resource.file_len();

        write_header(&mut self.stream, &header)
            .await
            .context("Failed to write response header")?;

        let bytes = write_body(&mut self.stream, resource, content_type)
            .await
            .context("Failed to write response body")?;

        self.stream
            .flush()
            .await
            .context("Failed to flush response")?;

        info!(
            path = %request.target_path,
            status = header.status.as_u16(),
            content_type = content_type.as_str(),
            file_len = ?file_len,
            bytes,
            "Request served"
        );

        Ok(())
    }
}
