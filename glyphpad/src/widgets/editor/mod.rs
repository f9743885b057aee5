pub(crate) mod command;
mod errors;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
mod services;
pub(crate) mod state;
mod surface;
pub(crate) mod view;

pub(crate) use command::EditorCommand;
pub(crate) use event::{EditorEffect, EditorEvent};
use glyphpad_core::{FileStore, SelectionManager};
use iced::Task;
use model::EditorViewModel;
use state::EditorState;

use crate::config::{AppConfig, config_dir};

/// Editor widget: font family/weight/italic selection over a text area,
/// restored from and persisted to the settings store.
pub(crate) struct EditorWidget {
    state: EditorState,
}

impl EditorWidget {
    /// Create the widget and restore persisted settings from disk.
    pub(crate) fn load(config: &AppConfig) -> Self {
        let catalog = services::load_catalog(config.catalog_path());
        let manager =
            SelectionManager::new(catalog, config.family_change_policy());
        let store = FileStore::new(config_dir());

        Self {
            state: EditorState::mount(
                manager,
                Box::new(store),
                config.style_mode(),
            ),
        }
    }

    /// Start loading the font resource resolved while mounting.
    pub(crate) fn boot(&mut self) -> Task<EditorEffect> {
        reducer::request_pending_font(&mut self.state)
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: EditorCommand,
    ) -> Task<EditorEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Return a read-only view model for the editor form.
    pub(crate) fn vm(&self) -> EditorViewModel<'_> {
        let manager = self.state.manager();
        let selection = manager.selection();

        EditorViewModel {
            family_names: manager.catalog().family_names(),
            family: &selection.family,
            weight_options: manager.weight_options(),
            weight: &selection.weight,
            italic: selection.italic,
            italic_available: manager.italic_available(),
            content: self.state.content(),
            font: self.state.surface().font(),
        }
    }
}
