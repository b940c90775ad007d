//! Player records as persisted in the player file.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Known rank tags. Stored rank fields stay free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Default,
    Vip,
    Helper,
    Mod,
    Admin,
}

impl Rank {
    pub const ALL: [Rank; 5] = [Rank::Default, Rank::Vip, Rank::Helper, Rank::Mod, Rank::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Default => "DEFAULT",
            Rank::Vip => "VIP",
            Rank::Helper => "HELPER",
            Rank::Mod => "MOD",
            Rank::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or_else(|| format!("Unknown rank: {}", s))
    }
}

/// A player's stored inventory. Both blobs are opaque to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contents: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub armor_contents: String,
}

/// A single player, keyed by `uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub uuid: String,
    #[serde(default)]
    pub player_rank: String,
    #[serde(default)]
    pub staff_rank: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<InventoryRecord>,
}

impl PlayerRecord {
    /// Record handed out on the first lookup of an unknown identity.
    pub fn new_default(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            player_rank: Rank::Default.to_string(),
            staff_rank: Rank::Default.to_string(),
            inventory: Some(InventoryRecord::default()),
        }
    }
}

/// Flattened inventory returned by `GET /players/inv/{uuid}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    pub uuid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inv_contents: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub armor_contents: String,
}

impl InventoryView {
    pub fn from_record(record: &PlayerRecord) -> Self {
        let inventory = record.inventory.as_ref();
        Self {
            uuid: record.uuid.clone(),
            inv_contents: inventory.map(|i| i.contents.clone()).unwrap_or_default(),
            armor_contents: inventory
                .map(|i| i.armor_contents.clone())
                .unwrap_or_default(),
        }
    }
}

/// Request body for setting a player's rank. A missing rank decodes as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRankRequest {
    #[serde(default)]
    pub rank: String,
}

/// Request body for the inventory and armor setters: a JSON object of strings.
///
/// Null values and missing keys read as empty, which clears the stored blob.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct BlobPayload(HashMap<String, Option<String>>);

impl BlobPayload {
    pub const INV_CONTENTS: &'static str = "invContents";
    pub const ARMOR_CONTENTS: &'static str = "armorContents";

    /// Take the value under `key`, empty when absent or null.
    pub fn take(&mut self, key: &str) -> String {
        self.0.remove(key).flatten().unwrap_or_default()
    }
}

/// Confirmation body returned by mutating endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
