//! Player store: lookup, default creation and field updates over the player file.
//!
//! Every mutation is a read-modify-write of the whole record set, serialized
//! behind a single store-wide lock so concurrent requests cannot lose updates.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::sync::Mutex;

use super::{init_player_file, write_atomic};
use crate::errors::AppError;
use crate::models::{InventoryRecord, InventoryView, PlayerRecord};

const LOAD_FAILED: &str = "Failed to load player data";
const SAVE_FAILED: &str = "Failed to save player data";

/// JSON-file backed store for all player records.
pub struct PlayerStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PlayerStore {
    /// Open the store at `path`, creating an empty player file if none exists.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        init_player_file(&path).await?;
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record from the player file, in stored order.
    pub async fn load_all(&self) -> Result<Vec<PlayerRecord>, AppError> {
        let data = tokio::fs::read(&self.path).await.map_err(|e| {
            tracing::error!("Failed to read player file {:?}: {}", self.path, e);
            AppError::StorageUnavailable(LOAD_FAILED.to_string())
        })?;
        serde_json::from_slice(&data).map_err(|e| {
            tracing::error!("Player file {:?} is corrupt: {}", self.path, e);
            AppError::CorruptData(LOAD_FAILED.to_string())
        })
    }

    /// Overwrite the player file with `records`.
    ///
    /// Does not take the write lock; callers doing read-modify-write must hold it.
    pub async fn save_all(&self, records: &[PlayerRecord]) -> Result<(), AppError> {
        let bytes = encode(records)?;
        write_atomic(&self.path, &bytes).await.map_err(|e| {
            tracing::error!("Failed to write player file {:?}: {}", self.path, e);
            AppError::StorageUnavailable(SAVE_FAILED.to_string())
        })
    }

    /// Whether a record exists for `identity`.
    pub async fn contains(&self, identity: &str) -> Result<bool, AppError> {
        let records = self.load_all().await?;
        Ok(find_by_identity(&records, identity).is_some())
    }

    /// Return the player for `identity`, creating a default one if absent.
    pub async fn get_or_create(&self, identity: &str) -> Result<PlayerRecord, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_all().await?;

        if let Some(index) = find_by_identity(&records, identity) {
            return Ok(records.swap_remove(index));
        }

        let record = PlayerRecord::new_default(identity);
        records.push(record.clone());
        self.save_all(&records).await?;
        tracing::info!(uuid = %identity, "Created default player record");

        Ok(record)
    }

    /// Overwrite the player rank of an existing player.
    pub async fn set_rank(&self, identity: &str, rank: &str) -> Result<PlayerRecord, AppError> {
        let record = self
            .mutate(identity, |record| {
                record.player_rank = rank.to_string();
                Ok(record.clone())
            })
            .await?;
        tracing::info!(uuid = %identity, rank = %rank, "Updated player rank");
        Ok(record)
    }

    /// Project the inventory of an existing player.
    pub async fn get_inventory(&self, identity: &str) -> Result<InventoryView, AppError> {
        let records = self.load_all().await?;
        find_by_identity(&records, identity)
            .map(|index| InventoryView::from_record(&records[index]))
            .ok_or_else(|| player_not_found(identity))
    }

    /// Overwrite the main inventory blob of an existing player.
    pub async fn set_inventory_main(&self, identity: &str, blob: &str) -> Result<(), AppError> {
        self.mutate(identity, |record| {
            inventory_of(record)?.contents = blob.to_string();
            Ok(())
        })
        .await?;
        tracing::debug!(uuid = %identity, bytes = blob.len(), "Updated inventory contents");
        Ok(())
    }

    /// Overwrite the armor blob of an existing player.
    pub async fn set_inventory_armor(&self, identity: &str, blob: &str) -> Result<(), AppError> {
        self.mutate(identity, |record| {
            inventory_of(record)?.armor_contents = blob.to_string();
            Ok(())
        })
        .await?;
        tracing::debug!(uuid = %identity, bytes = blob.len(), "Updated armor contents");
        Ok(())
    }

    /// Load, apply `apply` to the record for `identity`, and save, all under the write lock.
    ///
    /// Nothing is written when the record is missing or `apply` fails.
    async fn mutate<T, F>(&self, identity: &str, apply: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut PlayerRecord) -> Result<T, AppError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_all().await?;

        let index = find_by_identity(&records, identity).ok_or_else(|| player_not_found(identity))?;
        let output = apply(&mut records[index])?;

        self.save_all(&records).await?;
        Ok(output)
    }
}

/// Index of the first record whose uuid equals `identity`.
pub fn find_by_identity(records: &[PlayerRecord], identity: &str) -> Option<usize> {
    records.iter().position(|record| record.uuid == identity)
}

fn inventory_of(record: &mut PlayerRecord) -> Result<&mut InventoryRecord, AppError> {
    let uuid = record.uuid.clone();
    record.inventory.as_mut().ok_or_else(|| {
        tracing::warn!(uuid = %uuid, "Inventory update on player without inventory");
        AppError::PreconditionFailed("Player has no inventory".to_string())
    })
}

fn player_not_found(identity: &str) -> AppError {
    tracing::debug!(uuid = %identity, "Player not found");
    AppError::NotFound("Player not found".to_string())
}

fn encode(records: &[PlayerRecord]) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|e| {
            tracing::error!("Failed to encode player data: {}", e);
            AppError::Internal(SAVE_FAILED.to_string())
        })?;
    Ok(buf)
}
