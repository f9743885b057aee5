use iced::widget::text_editor;

/// UI events emitted by the editor presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum EditorEvent {
    FamilySelected(String),
    WeightSelected(String),
    /// The italic toggler was flipped.
    ItalicToggled,
    TextEdited(text_editor::Action),
    Reset,
    Save,
    /// Font resource read completed.
    FontResourceRead {
        href: String,
        result: Result<Vec<u8>, String>,
    },
}

/// Effect events produced by the editor reducer, routed outward.
#[derive(Debug, Clone)]
pub(crate) enum EditorEffect {
    /// A font resource read finished; loops back into the widget.
    FontResourceRead {
        href: String,
        result: Result<Vec<u8>, String>,
    },
    /// Register font bytes with the renderer.
    RegisterFont { href: String, bytes: Vec<u8> },
}
