use std::{io::ErrorKind, path::Path};

use tracing::debug;

use crate::{driver::WriteOutcome, error::WriteError};

async fn read_existing(path: &Path) -> Result<Option<Vec<u8>>, WriteError> {
    match tokio::fs::read(path).await {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(WriteError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Overwrites `path` with `content` unless it already holds exactly that.
/// The parent directory must exist.
pub async fn write_if_changed(
    path: impl AsRef<Path>,
    content: impl AsRef<str>,
) -> Result<WriteOutcome, WriteError> {
    let path = path.as_ref();
    let content = content.as_ref().as_bytes();

    if read_existing(path).await?.as_deref() == Some(content) {
        debug!("file did not change {}", path.display());
        return Ok(WriteOutcome::Unchanged);
    }

    tokio::fs::write(path, content)
        .await
        .map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(WriteOutcome::Written)
}

pub async fn ensure_unchanged(
    path: impl AsRef<Path>,
    content: impl AsRef<str>,
) -> Result<(), WriteError> {
    let path = path.as_ref();

    match read_existing(path).await? {
        Some(existing) if existing == content.as_ref().as_bytes() => Ok(()),
        _ => Err(WriteError::Stale {
            path: path.to_path_buf(),
        }),
    }
}
