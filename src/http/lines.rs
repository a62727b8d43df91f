use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Splits a buffered reader into lines ending in `\n`, `\r` or `\r\n`.
///
/// Terminators are consumed but never returned. A `\r` that arrives at the
/// end of the buffered data is remembered so a following `\n` is dropped on
/// the next read instead of being waited for.
pub struct LineReader<R> {
    inner: R,
    skip_lf: bool,
}

impl<R> LineReader<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            skip_lf: false,
        }
    }

    /// Reads the next line into `buf`, stopping early once it holds more
    /// than `limit` bytes.
    ///
    /// Returns `false` at end of stream when nothing was read.
    pub async fn read_line(&mut self, buf: &mut Vec<u8>, limit: usize) -> io::Result<bool> {
        buf.clear();
        let mut read_any = false;

        loop {
            let available = self.inner.fill_buf().await?;
            if available.is_empty() {
                return Ok(read_any);
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.inner.consume(1);
                    continue;
                }
            }

            let room = limit.saturating_add(1) - buf.len();
            let scan = &available[..available.len().min(room)];

            match scan.iter().position(|b| *b == b'\n' || *b == b'\r') {
                Some(end) => {
                    let mut used = end + 1;
                    let cr = scan[end] == b'\r';
                    let lf_follows = available.get(end + 1) == Some(&b'\n');
                    buf.extend_from_slice(&scan[..end]);

                    if cr && lf_follows {
                        used += 1;
                    } else if cr && available.len() == end + 1 {
                        self.skip_lf = true;
                    }

                    self.inner.consume(used);
                    return Ok(true);
                }
                None => {
                    let n = scan.len();
                    buf.extend_from_slice(scan);
                    self.inner.consume(n);
                    read_any = true;

                    if buf.len() > limit {
                        return Ok(true);
                    }
                }
            }
        }
    }
}
