use std::collections::HashSet;

use glyphpad_core::{
    SelectionManager, SettingsBridge, SettingsLoadStatus, SettingsStore,
    StoreError, StyleMode, apply_style,
};
use iced::widget::text_editor;

use super::surface::EditorSurface;

/// Selection, persistence and rendering state of the editor widget.
pub(crate) struct EditorState {
    manager: SelectionManager,
    bridge: SettingsBridge<Box<dyn SettingsStore>>,
    style_mode: StyleMode,
    surface: EditorSurface,
    content: text_editor::Content,
    fetched_fonts: HashSet<String>,
}

impl EditorState {
    /// Build state without touching the store.
    pub(crate) fn new(
        manager: SelectionManager,
        store: Box<dyn SettingsStore>,
        style_mode: StyleMode,
    ) -> Self {
        let mut state = Self {
            manager,
            bridge: SettingsBridge::new(store),
            style_mode,
            surface: EditorSurface::default(),
            content: text_editor::Content::new(),
            fetched_fonts: HashSet::new(),
        };
        state.apply_style();
        state
    }

    /// Build state and restore the last saved selection from the store.
    pub(crate) fn mount(
        manager: SelectionManager,
        store: Box<dyn SettingsStore>,
        style_mode: StyleMode,
    ) -> Self {
        let mut state = Self::new(manager, store, style_mode);
        state.restore();
        state
    }

    #[cfg(test)]
    pub(crate) fn selection(&self) -> &glyphpad_core::Selection {
        self.manager.selection()
    }

    pub(crate) fn manager(&self) -> &SelectionManager {
        &self.manager
    }

    pub(crate) fn surface(&self) -> &EditorSurface {
        &self.surface
    }

    pub(crate) fn content(&self) -> &text_editor::Content {
        &self.content
    }

    #[cfg(test)]
    pub(crate) fn bridge(&self) -> &SettingsBridge<Box<dyn SettingsStore>> {
        &self.bridge
    }

    pub(crate) fn set_family(&mut self, family: String) {
        self.manager.set_family(family);
        self.selection_changed();
    }

    pub(crate) fn set_weight(&mut self, weight: String) {
        self.manager.set_weight(weight);
        self.selection_changed();
    }

    pub(crate) fn toggle_italic(&mut self) {
        self.manager.toggle_italic();
        self.selection_changed();
    }

    /// Apply a text area action; edits update the text and persist.
    pub(crate) fn perform(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.content.perform(action);

        if is_edit {
            self.manager.set_text(self.content.text());
            self.autosave();
        }
    }

    /// Clear every field; the follow-up write stores the empty record.
    pub(crate) fn reset(&mut self) {
        self.manager.reset();
        self.content = text_editor::Content::new();
        self.selection_changed();
    }

    /// Write the current selection to the store.
    pub(crate) fn persist(&mut self) -> Result<(), StoreError> {
        self.bridge.save(self.manager.selection())
    }

    /// Link resolved since the last call that still needs loading.
    pub(crate) fn take_pending_link(&mut self) -> Option<String> {
        self.surface.take_pending_link()
    }

    /// Remember that the bytes behind `href` were handed to the renderer.
    pub(crate) fn mark_font_fetched(&mut self, href: String) {
        self.fetched_fonts.insert(href);
    }

    pub(crate) fn is_font_fetched(&self, href: &str) -> bool {
        self.fetched_fonts.contains(href)
    }

    fn restore(&mut self) {
        let load = self.bridge.load();
        match load.status() {
            SettingsLoadStatus::Loaded => log::debug!("settings restored"),
            SettingsLoadStatus::Missing => {
                log::debug!("no saved settings, using defaults")
            },
            SettingsLoadStatus::Invalid(message) => {
                log::warn!("saved settings invalid: {message}")
            },
            SettingsLoadStatus::Unavailable(message) => {
                log::warn!("settings read failed: {message}")
            },
        }

        if let Some(selection) = load.restored() {
            self.content = text_editor::Content::with_text(&selection.text);
            self.manager.restore(selection);
            self.apply_style();
        }
    }

    fn selection_changed(&mut self) {
        self.autosave();
        self.apply_style();
    }

    fn autosave(&mut self) {
        if let Err(err) = self.persist() {
            log::warn!("settings save failed: {err}");
        }
    }

    fn apply_style(&mut self) {
        apply_style(
            self.manager.selection(),
            self.manager.catalog(),
            self.style_mode,
            &mut self.surface,
        );
    }
}

#[cfg(test)]
mod tests {
    use glyphpad_core::{
        FamilyChangePolicy, FontCatalog, MemoryStore, SETTINGS_KEY,
        Selection, SelectionManager, StyleMode,
    };
    use iced::font::Style;

    use super::EditorState;

    fn catalog() -> FontCatalog {
        FontCatalog::from_json_str(
            r#"{"Roboto": {"400": "file:///r400.ttf", "700": "file:///r700.ttf", "400italic": "file:///r400i.ttf"}}"#,
        )
        .expect("catalog should parse")
    }

    fn state_with(store: MemoryStore) -> EditorState {
        EditorState::mount(
            SelectionManager::new(catalog(), FamilyChangePolicy::Reset),
            Box::new(store),
            StyleMode::WithStylesheetLink,
        )
    }

    #[test]
    fn given_saved_record_when_mounted_then_selection_and_text_restored() {
        let store = MemoryStore::new().with_entry(
            SETTINGS_KEY,
            r#"{"text":"hello","fontFamily":"Roboto","fontWeight":"400","italic":true}"#,
        );

        let mut state = state_with(store);

        assert_eq!(state.selection().family, "Roboto");
        assert!(state.selection().italic);
        assert!(state.content().text().starts_with("hello"));
        assert_eq!(state.surface().font().style, Style::Italic);
        assert_eq!(
            state.take_pending_link().as_deref(),
            Some("file:///r400i.ttf")
        );
    }

    #[test]
    fn given_corrupt_record_when_mounted_then_defaults_apply() {
        let store = MemoryStore::new().with_entry(SETTINGS_KEY, "][");

        let state = state_with(store);

        assert_eq!(state.selection(), &Selection::default());
    }

    #[test]
    fn given_weight_change_when_applied_then_record_is_rewritten() {
        let mut state = state_with(MemoryStore::new());
        state.set_family(String::from("Roboto"));

        state.set_weight(String::from("700"));

        let saved = state.bridge().load().restored().expect("record saved");
        assert_eq!(saved.family, "Roboto");
        assert_eq!(saved.weight, "700");
        assert_eq!(state.surface().link(), Some("file:///r700.ttf"));
    }

    #[test]
    fn given_populated_state_when_reset_then_empty_record_is_stored() {
        let mut state = state_with(MemoryStore::new());
        state.set_family(String::from("Roboto"));
        state.set_weight(String::from("400"));
        state.toggle_italic();

        state.reset();

        let saved = state.bridge().load().restored().expect("record saved");
        assert_eq!(saved, Selection::default());
        assert_eq!(state.surface().font().style, Style::Normal);
    }
}
