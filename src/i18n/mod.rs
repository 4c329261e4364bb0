use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::types::{error::AppError, locale::Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    SnapshotCreate,
    SnapshotCreateFail,
    SnapshotGet,
    SnapshotGetFail,
    SnapshotDelete,
    SnapshotDeleteFail,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SnapshotCreate => "snapshot.create.message",
            Self::SnapshotCreateFail => "snapshot.create.fail.message",
            Self::SnapshotGet => "snapshot.get.message",
            Self::SnapshotGetFail => "snapshot.get.fail.message",
            Self::SnapshotDelete => "snapshot.delete.message",
            Self::SnapshotDeleteFail => "snapshot.delete.fail.message",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up the message template for a key. Never fails: an unknown key
/// resolves to the key itself.
#[cfg_attr(test, mockall::automock)]
pub trait MessageResolver: Send + Sync {
    fn resolve(&self, key: MessageKey, locale: &Locale) -> String;
}

const BASE_BUNDLE: &str = include_str!("../../locales/messages.json");
const BUNDLES: &[(&str, &str)] = &[
    ("de", include_str!("../../locales/messages_de.json")),
    ("en_US", include_str!("../../locales/messages_en_US.json")),
];

type Bundle = HashMap<String, String>;

/// Message bundles keyed like `messages_<suffix>.json`: `de`, `en_US`.
/// Lookup goes region bundle, language bundle, base bundle, then the key.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    base: Bundle,
    bundles: HashMap<String, Bundle>,
}

impl MessageCatalog {
    /// Catalog built from the bundles compiled into the binary.
    pub fn bundled() -> Result<Self, AppError> {
        let mut catalog = MessageCatalog::from_json(BASE_BUNDLE)?;
        for (suffix, raw) in BUNDLES {
            catalog = catalog.with_bundle(suffix, raw)?;
        }
        Ok(catalog)
    }

    pub fn from_json(base: &str) -> Result<Self, AppError> {
        Ok(MessageCatalog {
            base: parse_bundle("base", base)?,
            bundles: HashMap::new(),
        })
    }

    pub fn with_bundle(mut self, suffix: &str, raw: &str) -> Result<Self, AppError> {
        self.bundles.insert(suffix.to_string(), parse_bundle(suffix, raw)?);
        Ok(self)
    }

    fn lookup(&self, key: &str, locale: &Locale) -> Option<&String> {
        let regional = locale
            .region()
            .map(|region| format!("{}_{}", locale.language(), region));

        regional
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(locale.language()))
            .filter_map(|suffix| self.bundles.get(suffix))
            .find_map(|bundle| bundle.get(key))
            .or_else(|| self.base.get(key))
    }
}

impl MessageResolver for MessageCatalog {
    fn resolve(&self, key: MessageKey, locale: &Locale) -> String {
        match self.lookup(key.as_str(), locale) {
            Some(template) => template.clone(),
            None => {
                debug!("no message for {} in {}, using the key", key, locale);
                key.as_str().to_string()
            }
        }
    }
}

fn parse_bundle(name: &str, raw: &str) -> Result<Bundle, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::Internal(format!("message bundle {name}: {e}")))
}

/// Replaces the first `%s` or `%d` in `template` with the snapshot id.
pub fn format_message(template: &str, snapshot_id: i32) -> String {
    let position = ["%s", "%d"]
        .iter()
        .filter_map(|placeholder| template.find(placeholder))
        .min();

    match position {
        Some(at) => format!("{}{}{}", &template[..at], snapshot_id, &template[at + 2..]),
        None => template.to_string(),
    }
}
