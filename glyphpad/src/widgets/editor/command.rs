use iced::widget::text_editor;

/// Internal commands dispatched to the editor reducer.
#[derive(Debug, Clone)]
pub(crate) enum EditorCommand {
    /// Change the family under the configured family-change policy.
    SetFamily(String),
    /// Set the weight verbatim.
    SetWeight(String),
    ToggleItalic,
    /// Apply a text area action.
    Edit(text_editor::Action),
    /// Clear the selection and the text.
    Reset,
    /// Write the current selection to the store.
    Save,
    /// Font resource bytes were read (or failed to read).
    FontResourceRead {
        href: String,
        result: Result<Vec<u8>, String>,
    },
}
