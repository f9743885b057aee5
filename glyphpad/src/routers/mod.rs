use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod editor;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Editor widget
        AppEvent::EditorUi(event) => editor::route_event(app, event),
        AppEvent::EditorEffect(effect) => editor::route_effect(effect),
        // Direct operations
        AppEvent::FontRegistered { href, result } => {
            editor::font_registered(&href, result);
            Task::none()
        },
    }
}
