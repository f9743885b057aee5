use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::editor::{EditorCommand, EditorEffect, EditorEvent};

/// Route an editor UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: EditorEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route an editor command directly.
pub(crate) fn route_command(
    app: &mut App,
    command: EditorCommand,
) -> Task<AppEvent> {
    app.widgets
        .editor
        .reduce(command)
        .map(AppEvent::EditorEffect)
}

/// Route an editor effect event to app-level tasks.
pub(crate) fn route_effect(effect: EditorEffect) -> Task<AppEvent> {
    match effect {
        EditorEffect::FontResourceRead { href, result } => Task::done(
            AppEvent::EditorUi(EditorEvent::FontResourceRead { href, result }),
        ),
        EditorEffect::RegisterFont { href, bytes } => {
            iced::font::load(bytes).map(move |result| {
                AppEvent::FontRegistered {
                    href: href.clone(),
                    result,
                }
            })
        },
    }
}

/// Log the outcome of registering a font resource with the renderer.
pub(crate) fn font_registered(
    href: &str,
    result: Result<(), iced::font::Error>,
) {
    match result {
        Ok(()) => log::info!("font resource registered: {href}"),
        Err(err) => log::warn!("font resource {href} rejected: {err:?}"),
    }
}

fn map_event_to_command(event: EditorEvent) -> EditorCommand {
    use {EditorCommand as C, EditorEvent as E};

    match event {
        E::FamilySelected(family) => C::SetFamily(family),
        E::WeightSelected(weight) => C::SetWeight(weight),
        E::ItalicToggled => C::ToggleItalic,
        E::TextEdited(action) => C::Edit(action),
        E::Reset => C::Reset,
        E::Save => C::Save,
        E::FontResourceRead { href, result } => {
            C::FontResourceRead { href, result }
        },
    }
}
