//! Background JSON-lines writer.
//!
//! The game loop is synchronous. The journal owns a small tokio runtime and
//! hands records to a writer task over an unbounded channel, so recording
//! never blocks a tick on file I/O.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs::OpenOptions;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::JournalConfig;
use crate::record::Record;

pub struct Journal {
    rt: Runtime,
    path: PathBuf,
    tx: Option<mpsc::UnboundedSender<Record>>,
    writer: Option<JoinHandle<Result<u64>>>,
}

impl Journal {
    /// Open the journal described by `config`.
    ///
    /// Returns `Ok(None)` when journaling is disabled. The file is opened in
    /// append mode before this returns, so a bad path fails here.
    pub fn open(config: &JournalConfig) -> Result<Option<Self>> {
        match config.path.as_deref() {
            Some(path) => Self::open_path(path).map(Some),
            None => Ok(None),
        }
    }

    pub fn open_path(path: &Path) -> Result<Self> {
        let rt = Runtime::new().context("failed to create journal runtime")?;
        let file = rt
            .block_on(OpenOptions::new().create(true).append(true).open(path))
            .with_context(|| format!("failed to open journal {}", path.display()))?;

        let (tx, rx) = mpsc::unbounded_channel::<Record>();
        let writer = rt.spawn(write_lines(file, rx));

        Ok(Self {
            rt,
            path: path.to_path_buf(),
            tx: Some(tx),
            writer: Some(writer),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Queue one record. Returns `false` once the writer has gone away.
    pub fn record(&self, rec: Record) -> bool {
        match self.tx.as_ref() {
            Some(tx) => tx.send(rec).is_ok(),
            None => false,
        }
    }

    /// Flush queued records and wait for the writer. Returns the number of lines written.
    pub fn close(mut self) -> Result<u64> {
        self.finish()
    }

    fn finish(&mut self) -> Result<u64> {
        // Dropping the sender ends the writer loop once the queue is drained.
        self.tx.take();
        let Some(writer) = self.writer.take() else {
            return Ok(0);
        };
        let written = self
            .rt
            .block_on(writer)
            .context("journal writer task panicked")?
            .with_context(|| format!("failed to write journal {}", self.path.display()))?;
        Ok(written)
    }
}

impl Drop for Journal {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}

/// Serialize each record as one JSON line. A record that fails to encode
/// stops the writer with an error instead of being skipped.
async fn write_lines<T, W>(mut out: W, mut rx: mpsc::UnboundedReceiver<T>) -> Result<u64>
where
    T: Serialize,
    W: AsyncWrite + Unpin,
{
    let mut buf: Vec<u8> = Vec::with_capacity(256);
    let mut written = 0;

    while let Some(rec) = rx.recv().await {
        buf.clear();
        serde_json::to_writer(&mut buf, &rec)
            .with_context(|| format!("failed to encode journal record {}", written + 1))?;
        buf.push(b'\n');
        out.write_all(&buf).await?;
        written += 1;
    }

    out.flush().await?;
    Ok(written)
}
