//! Font selection state, catalog lookups and settings persistence for the
//! Glyphpad editor widget.
//!
//! The crate is UI-agnostic. Front-ends plug in two collaborators:
//! - a [`SettingsStore`] holding the serialized settings record;
//! - a [`StyleTarget`] receiving the resolved inline style and the optional
//!   font resource link.
//!
//! The usual flow:
//! 1. Parse a [`FontCatalog`] once at startup.
//! 2. Build a [`SelectionManager`] with the configured
//!    [`FamilyChangePolicy`].
//! 3. Restore the last [`Selection`] through [`SettingsBridge::load`].
//! 4. After every mutation call [`SettingsBridge::save`] and
//!    [`apply_style`].

mod catalog;
mod error;
mod persistence;
mod selection;
mod style;

pub use catalog::{FontCatalog, FontFamily, FontVariant, ITALIC_MARKER};
pub use error::{CatalogError, StoreError};
pub use persistence::{
    FileStore, MemoryStore, SETTINGS_KEY, SettingsBridge, SettingsLoad,
    SettingsLoadStatus, SettingsStore,
};
pub use selection::{FamilyChangePolicy, Selection, SelectionManager};
pub use style::{
    FONT_LINK_ID, FontStyle, InlineStyle, StyleMode, StyleTarget, apply_style,
};
