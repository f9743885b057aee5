use iced::widget::button::Status as ButtonStatus;
use iced::widget::{
    button, column, container, pick_list, row, text, text_editor, toggler,
};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::widgets::editor::event::EditorEvent;
use crate::widgets::editor::model::{
    EditorViewModel, FamilyChoice, UNSET_FAMILY_LABEL,
};

const FORM_PADDING: f32 = 16.0;
const FORM_SPACING: f32 = 12.0;
const CONTROL_SPACING: f32 = 10.0;
const SELECTOR_WIDTH: f32 = 220.0;
const EDITOR_PADDING: f32 = 10.0;
const BUTTON_HEIGHT: f32 = 28.0;
const BUTTON_PADDING_X: f32 = 14.0;
const BUTTON_RADIUS: f32 = 4.0;

const WEIGHT_PLACEHOLDER: &str = "Select Font Weight";
const TEXT_PLACEHOLDER: &str = "Type your text here...";

/// Props for the editor form view.
pub(crate) struct EditorFormProps<'a> {
    pub(crate) vm: EditorViewModel<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render selectors, the text area and the action buttons.
pub(crate) fn view(
    props: EditorFormProps<'_>,
) -> Element<'_, EditorEvent, Theme, iced::Renderer> {
    let controls = controls_row(&props);
    let editor = text_area(&props);
    let actions = actions_row(&props);

    column![controls, editor, actions]
        .spacing(FORM_SPACING)
        .padding(FORM_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn controls_row<'a>(
    props: &EditorFormProps<'a>,
) -> Element<'a, EditorEvent, Theme, iced::Renderer> {
    let ui = &props.fonts.ui;

    let family_selector = pick_list(
        props.vm.family_choices(),
        props.vm.selected_family(),
        |choice: FamilyChoice| EditorEvent::FamilySelected(choice.into_name()),
    )
    .placeholder(UNSET_FAMILY_LABEL)
    .font(ui.font_type)
    .text_size(ui.size)
    .width(Length::Fixed(SELECTOR_WIDTH));

    let weights = if props.vm.weight_enabled() {
        owned(&props.vm.weight_options)
    } else {
        Vec::new()
    };
    let weight_selector = pick_list(
        weights,
        selected(props.vm.weight),
        EditorEvent::WeightSelected,
    )
    .placeholder(WEIGHT_PLACEHOLDER)
    .font(ui.font_type)
    .text_size(ui.size)
    .width(Length::Fixed(SELECTOR_WIDTH));

    let italic_toggle = toggler(props.vm.italic)
        .label("Italic")
        .text_size(ui.size)
        .on_toggle_maybe(
            props
                .vm
                .italic_available
                .then_some(|_: bool| EditorEvent::ItalicToggled),
        );

    row![family_selector, weight_selector, italic_toggle]
        .spacing(CONTROL_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn text_area<'a>(
    props: &EditorFormProps<'a>,
) -> Element<'a, EditorEvent, Theme, iced::Renderer> {
    text_editor(props.vm.content)
        .placeholder(TEXT_PLACEHOLDER)
        .on_action(EditorEvent::TextEdited)
        .font(props.vm.font)
        .size(props.fonts.editor.size)
        .padding(EDITOR_PADDING)
        .height(Length::Fill)
        .into()
}

fn actions_row<'a>(
    props: &EditorFormProps<'a>,
) -> Element<'a, EditorEvent, Theme, iced::Renderer> {
    let size = props.fonts.ui.size;
    let reset = action_button("Reset", EditorEvent::Reset, size);
    let save = action_button("Save", EditorEvent::Save, size);

    container(row![reset, save].spacing(CONTROL_SPACING))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .into()
}

fn action_button<'a>(
    label: &'a str,
    event: EditorEvent,
    size: f32,
) -> Element<'a, EditorEvent, Theme, iced::Renderer> {
    let content = container(
        text(label)
            .size(size)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center);

    button(content)
        .padding([0.0, BUTTON_PADDING_X])
        .height(Length::Fixed(BUTTON_HEIGHT))
        .style(button_style)
        .on_press(event)
        .into()
}

fn button_style(theme: &Theme, status: ButtonStatus) -> button::Style {
    let palette = theme.extended_palette();
    let pair = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => palette.primary.strong,
        _ => palette.primary.base,
    };

    button::Style {
        background: Some(pair.color.into()),
        text_color: pair.text,
        border: iced::Border {
            radius: BUTTON_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn selected(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
