use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{info, warn};

use crate::db::{ItemStore, SnapshotStore};
use crate::i18n::{format_message, MessageKey, MessageResolver};
use crate::types::{
    error::AppError,
    item::Item,
    locale::Locale,
    response::{Envelope, UNASSIGNED_SNAPSHOT_ID},
    snapshot::Snapshot,
};

/// Stores batches of observed items as snapshots and reads them back.
#[derive(Clone)]
pub struct FridgeContentService {
    items: Arc<dyn ItemStore>,
    snapshots: Arc<dyn SnapshotStore>,
    messages: Arc<dyn MessageResolver>,
}

impl FridgeContentService {
    pub fn new(
        items: Arc<dyn ItemStore>,
        snapshots: Arc<dyn SnapshotStore>,
        messages: Arc<dyn MessageResolver>,
    ) -> Self {
        FridgeContentService {
            items,
            snapshots,
            messages,
        }
    }

    /// Creates a snapshot and stores the batch under it, one item per
    /// description with `amount` set to how often it occurred.
    pub async fn save_items(&self, items: Vec<Item>, locale: &Locale) -> Result<Envelope, AppError> {
        let snapshot = self.snapshots.save(Snapshot::new()).await?;

        let Some(snapshot_id) = snapshot.id else {
            warn!("snapshot store returned no id, nothing saved");
            let message = self.messages.resolve(MessageKey::SnapshotCreateFail, locale);
            return Ok(Envelope::missing(message, UNASSIGNED_SNAPSHOT_ID, Vec::new()));
        };

        let batch = collapse_items(items, snapshot_id);
        let saved = self.items.save_all(batch).await?;
        info!("created snapshot {} with {} items", snapshot_id, saved.len());

        let template = self.messages.resolve(MessageKey::SnapshotCreate, locale);
        Ok(Envelope {
            message: format_message(&template, snapshot_id),
            snapshot_id,
            capture_date: snapshot.capture_date,
            items: saved,
        })
    }

    pub async fn get_items(&self, snapshot_id: i32) -> Result<Vec<Item>, AppError> {
        self.items.find_all_by_snapshot_id(snapshot_id).await
    }

    /// The items of a snapshot plus its capture date.
    pub async fn get_items_with_context(&self, snapshot_id: i32, locale: &Locale) -> Result<Envelope, AppError> {
        let items = self.get_items(snapshot_id).await?;
        let snapshot = self.snapshots.find_by_id(snapshot_id).await?;

        Ok(match snapshot {
            Some(snapshot) => {
                let template = self.messages.resolve(MessageKey::SnapshotGet, locale);
                Envelope {
                    message: format_message(&template, snapshot_id),
                    snapshot_id,
                    capture_date: snapshot.capture_date,
                    items,
                }
            }
            None => {
                info!("snapshot {} not found", snapshot_id);
                let template = self.messages.resolve(MessageKey::SnapshotGetFail, locale);
                Envelope::missing(format_message(&template, snapshot_id), snapshot_id, items)
            }
        })
    }

    /// Deletes the snapshot and its items, reporting what was there before.
    /// The delete calls go out even when the snapshot is unknown.
    pub async fn delete_items(&self, snapshot_id: i32, locale: &Locale) -> Result<Envelope, AppError> {
        let items = self.get_items(snapshot_id).await?;
        let snapshot = self.snapshots.find_by_id(snapshot_id).await?;

        self.items.delete_all_by_snapshot_id(snapshot_id).await?;
        self.snapshots.delete_by_id(snapshot_id).await?;

        Ok(match snapshot {
            Some(snapshot) => {
                info!("deleted snapshot {} with {} items", snapshot_id, items.len());
                let template = self.messages.resolve(MessageKey::SnapshotDelete, locale);
                Envelope {
                    message: format_message(&template, snapshot_id),
                    snapshot_id,
                    capture_date: snapshot.capture_date,
                    items,
                }
            }
            None => {
                info!("snapshot {} not found for deletion", snapshot_id);
                let template = self.messages.resolve(MessageKey::SnapshotDeleteFail, locale);
                Envelope::missing(format_message(&template, snapshot_id), snapshot_id, items)
            }
        })
    }
}

/// Ties the batch to `snapshot_id` and keeps the first item of every
/// description, its `amount` being the description's count in the whole batch.
/// Caller supplied ids are dropped.
pub fn collapse_items(items: Vec<Item>, snapshot_id: i32) -> Vec<Item> {
    let mut counts: HashMap<String, i32> = HashMap::new();
    for item in &items {
        *counts.entry(item.description.clone()).or_default() += 1;
    }

    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.description.clone()))
        .map(|item| Item {
            id: None,
            snapshot_id: Some(snapshot_id),
            amount: counts[&item.description],
            description: item.description,
        })
        .collect()
}
