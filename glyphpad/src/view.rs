use iced::font::Style;
use iced::widget::{column, container, text};
use iced::{Element, Font, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::widgets::editor::view::editor_form;

const HEADER_TITLE: &str = "Text Editor";
const HEADER_FONT_SIZE: f32 = 22.0;
const HEADER_PADDING: f32 = 16.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let header = view_header();
    let form = editor_form::view(editor_form::EditorFormProps {
        vm: app.widgets.editor.vm(),
        fonts: &app.fonts,
    })
    .map(AppEvent::EditorUi);

    column![header, form]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header<'a>() -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let title = text(HEADER_TITLE).size(HEADER_FONT_SIZE).font(Font {
        style: Style::Italic,
        ..Font::default()
    });

    container(title)
        .width(Length::Fill)
        .padding([HEADER_PADDING / 2.0, HEADER_PADDING])
        .align_x(alignment::Horizontal::Left)
        .into()
}
