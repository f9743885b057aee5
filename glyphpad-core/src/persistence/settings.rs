use serde::Serialize;
use serde_json::Value;

use super::store::SettingsStore;
use crate::error::StoreError;
use crate::selection::Selection;

/// Fixed storage key of the settings record.
pub const SETTINGS_KEY: &str = "textEditorSettings";

/// Wire form of a [`Selection`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSettings<'a> {
    text: &'a str,
    font_family: &'a str,
    font_weight: &'a str,
    italic: bool,
}

impl<'a> From<&'a Selection> for PersistedSettings<'a> {
    fn from(selection: &'a Selection) -> Self {
        Self {
            text: &selection.text,
            font_family: &selection.family,
            font_weight: &selection.weight,
            italic: selection.italic,
        }
    }
}

/// Status describing how settings were restored from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsLoadStatus {
    Loaded,
    Missing,
    /// The record exists but is not a JSON object.
    Invalid(String),
    /// The store itself could not be read.
    Unavailable(String),
}

/// Result of loading settings: the selection to start from and how it was
/// obtained.
#[derive(Debug, Clone)]
pub struct SettingsLoad {
    selection: Selection,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    pub fn new(selection: Selection, status: SettingsLoadStatus) -> Self {
        Self { selection, status }
    }

    pub fn status(&self) -> &SettingsLoadStatus {
        &self.status
    }

    /// Restored selection, or `None` when nothing was restored.
    pub fn restored(self) -> Option<Selection> {
        match self.status {
            SettingsLoadStatus::Loaded => Some(self.selection),
            _ => None,
        }
    }

    pub fn into_parts(self) -> (Selection, SettingsLoadStatus) {
        (self.selection, self.status)
    }
}

/// Reads and writes the settings record through a [`SettingsStore`].
#[derive(Debug)]
pub struct SettingsBridge<S> {
    store: S,
}

impl<S: SettingsStore> SettingsBridge<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restore the last saved selection. Never fails: any problem yields
    /// defaults and a non-`Loaded` status.
    pub fn load(&self) -> SettingsLoad {
        let raw = match self.store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                return SettingsLoad::new(
                    Selection::default(),
                    SettingsLoadStatus::Missing,
                );
            },
            Err(err) => {
                return SettingsLoad::new(
                    Selection::default(),
                    SettingsLoadStatus::Unavailable(format!("{err}")),
                );
            },
        };

        let parsed = match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(err) => {
                return SettingsLoad::new(
                    Selection::default(),
                    SettingsLoadStatus::Invalid(format!("{err}")),
                );
            },
        };

        match selection_from_json(&parsed) {
            Some(selection) => {
                SettingsLoad::new(selection, SettingsLoadStatus::Loaded)
            },
            None => SettingsLoad::new(
                Selection::default(),
                SettingsLoadStatus::Invalid(String::from(
                    "settings record is not an object",
                )),
            ),
        }
    }

    /// Overwrite the stored record with `selection`.
    pub fn save(&mut self, selection: &Selection) -> Result<(), StoreError> {
        let payload = serde_json::to_string(&PersistedSettings::from(selection))?;
        self.store.set(SETTINGS_KEY, &payload)
    }
}

fn selection_from_json(value: &Value) -> Option<Selection> {
    let record = value.as_object()?;
    let mut selection = Selection::default();

    if let Some(text) = read_string_field(record, "text") {
        selection.text = text;
    }
    if let Some(family) = read_string_field(record, "fontFamily") {
        selection.family = family;
    }
    if let Some(weight) = read_string_field(record, "fontWeight") {
        selection.weight = weight;
    }
    if let Some(italic) = record.get("italic").and_then(Value::as_bool) {
        selection.italic = italic;
    }

    Some(selection)
}

fn read_string_field(
    record: &serde_json::Map<String, Value>,
    key: &str,
) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}
