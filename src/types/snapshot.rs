use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::item::Item;

/// The fridge content at one moment. `id` is `None` until storage assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub id: Option<i32>,
    pub capture_date: DateTime<Utc>,
}

impl Snapshot {
    pub fn new() -> Self {
        Snapshot { id: None, capture_date: Utc::now() }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl From<entity::snapshot::Model> for Snapshot {
    fn from(model: entity::snapshot::Model) -> Self {
        Snapshot { id: Some(model.id), capture_date: model.capture_date }
    }
}

/// A snapshot with its items, as loaded by
/// `PostgresService::load_snapshot_with_items` for callers outside the HTTP
/// routes. Serializes to the same camelCase shape as the envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotWithItems {
    pub id: Option<i32>,
    pub capture_date: DateTime<Utc>,
    pub items: Vec<Item>,
}

impl SnapshotWithItems {
    pub fn new(snapshot: Snapshot, items: Vec<Item>) -> Self {
        SnapshotWithItems { id: snapshot.id, capture_date: snapshot.capture_date, items }
    }
}
