use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::error::AppResult;
use crate::workflow::resolve::LineResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub lines_read: usize,
    pub lines_written: usize,
}

/// Resolves every input line on its own task and writes each result as soon
/// as it is ready. Output follows completion order, not input order.
pub struct Dispatcher {
    resolver: LineResolver,
    limit: Option<Arc<Semaphore>>,
}

impl Dispatcher {
    /// `max_in_flight` of `None` launches every lookup at once.
    pub fn new(resolver: LineResolver, max_in_flight: Option<usize>) -> Self {
        Self {
            resolver,
            limit: max_in_flight.map(|permits| Arc::new(Semaphore::new(permits.max(1)))),
        }
    }

    pub async fn run<R, W>(&self, input: R, output: W) -> AppResult<DispatchSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let (lines_read, lines_written) =
            tokio::try_join!(self.fan_out(input, tx), write_lines(rx, output))?;

        Ok(DispatchSummary {
            lines_read,
            lines_written,
        })
    }

    async fn fan_out<R>(
        &self,
        mut input: R,
        tx: mpsc::UnboundedSender<String>,
    ) -> AppResult<usize>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut tasks = JoinSet::new();
        let mut lines_read = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            lines_read += 1;
            // Branch names are not guaranteed to be UTF-8.
            let line = String::from_utf8_lossy(&buf).into_owned();
            let resolver = self.resolver.clone();
            let limit = self.limit.clone();
            let tx = tx.clone();
            tasks.spawn(async move {
                let _permit = match limit {
                    Some(limit) => limit.acquire_owned().await.ok(),
                    None => None,
                };
                let resolved = resolver.resolve(&line).await;
                if tx.send(resolved).is_err() {
                    debug!("output closed before line was written");
                }
            });
        }
        drop(tx);

        while let Some(joined) = tasks.join_next().await {
            if let Err(err) = joined {
                error!(error = %err, "line task did not complete");
            }
        }

        Ok(lines_read)
    }
}

/// Single writer for the output stream; each line goes out in one `write_all`.
async fn write_lines<W>(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut output: W,
) -> AppResult<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut lines_written = 0;
    while let Some(mut line) = rx.recv().await {
        line.push('\n');
        output.write_all(line.as_bytes()).await?;
        output.flush().await?;
        lines_written += 1;
    }
    Ok(lines_written)
}
