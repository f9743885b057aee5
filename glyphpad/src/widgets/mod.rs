pub(crate) mod editor;

pub(crate) struct Widgets {
    pub(crate) editor: editor::EditorWidget,
}
