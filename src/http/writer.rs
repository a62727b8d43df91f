use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::ResponseHeader;

/// Pushes a fully serialized buffer to a stream, tracking partial writes.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(header: &ResponseHeader) -> Self {
        Self {
            buffer: header.serialize(),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}

/// Writes the response head. Any failure here aborts the request.
pub async fn write_header<W>(stream: &mut W, header: &ResponseHeader) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    ResponseWriter::new(header).write_to_stream(stream).await
}
