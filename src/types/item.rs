use serde::{Serialize, Deserialize};

/// One product type observed in the fridge and how many of it were seen.
///
/// Incoming batches usually only carry `description`; `id`, `snapshot_id` and
/// `amount` are assigned by the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub snapshot_id: Option<i32>,
    pub description: String,
    #[serde(default)]
    pub amount: i32,
}

impl Item {
    pub fn new(description: impl Into<String>) -> Self {
        Item {
            id: None,
            snapshot_id: None,
            description: description.into(),
            amount: 0,
        }
    }
}

impl From<entity::item::Model> for Item {
    fn from(model: entity::item::Model) -> Self {
        Item {
            id: Some(model.id),
            snapshot_id: Some(model.snapshot_id),
            description: model.description,
            amount: model.amount,
        }
    }
}
