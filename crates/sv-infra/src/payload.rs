//! Raw payload input.
//!
//! The search response is produced upstream; this only reads the bytes
//! from wherever the caller put them.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::io::AsyncReadExt;

/// Where a raw search response is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    File(PathBuf),
    Stdin,
}

impl PayloadSource {
    /// `-` means standard input, anything else is a file path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }
}

pub async fn read_payload(source: &PayloadSource) -> anyhow::Result<Vec<u8>> {
    match source {
        PayloadSource::File(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read payload file: {}", path.display())),
        PayloadSource::Stdin => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("Failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}
