mod settings;
mod store;

pub use settings::{
    SETTINGS_KEY, SettingsBridge, SettingsLoad, SettingsLoadStatus,
};
pub use store::{FileStore, MemoryStore, SettingsStore};
