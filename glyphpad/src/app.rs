#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Task, Theme};

use crate::config::load_initial_config;
use crate::shared::ui::fonts::FontsConfig;
use crate::widgets::Widgets;
use crate::widgets::editor::{EditorEffect, EditorEvent, EditorWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 720.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Editor widget
    EditorUi(EditorEvent),
    EditorEffect(EditorEffect),
    // Direct operations
    FontRegistered {
        href: String,
        result: Result<(), iced::font::Error>,
    },
}

/// Root application state.
pub(crate) struct App {
    pub(crate) fonts: FontsConfig,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = load_initial_config();
        log::debug!("starting with {config:?}");

        let mut editor = EditorWidget::load(&config);
        let boot = editor.boot().map(AppEvent::EditorEffect);

        let app = App {
            fonts: FontsConfig::default(),
            widgets: Widgets { editor },
        };

        (app, boot)
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Glyphpad")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
