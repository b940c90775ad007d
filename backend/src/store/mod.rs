//! File-backed persistence for player records.
//!
//! The player file is the source of truth. It is read whole and rewritten whole.

mod player_store;

pub use player_store::*;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::AsyncWriteExt;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create the player file (and its parent directory) holding an empty set if missing.
pub async fn init_player_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    match tokio::fs::try_exists(path).await? {
        true => Ok(()),
        false => {
            tracing::info!("Creating empty player file at {:?}", path);
            write_atomic(path, b"[]").await
        }
    }
}

/// Replace `path` with `bytes` via a synced sibling temp file and a rename.
///
/// Readers observe either the old or the new contents, never a truncated file.
pub async fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = temp_path(path);

    let result = async {
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(&tmp, path).await
    }
    .await;

    if result.is_err() {
        tokio::fs::remove_file(&tmp).await.ok();
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "players.json".to_string());
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{}.{}.{}.tmp", name, std::process::id(), n))
}
