use glyphpad_core::{FONT_LINK_ID, InlineStyle, StyleTarget};
use iced::Font;

use crate::shared::ui::fonts::{FamilyNames, editor_font};

/// Text area style target: inline font plus the single font resource link.
#[derive(Debug, Default)]
pub(crate) struct EditorSurface {
    inline: InlineStyle,
    font: Font,
    link: Option<String>,
    pending_link: Option<String>,
    names: FamilyNames,
}

impl EditorSurface {
    /// Font used to render the text area.
    pub(crate) fn font(&self) -> Font {
        self.font
    }

    #[cfg(test)]
    pub(crate) fn inline(&self) -> &InlineStyle {
        &self.inline
    }

    /// Current font resource link, if one was ever resolved.
    #[cfg(test)]
    pub(crate) fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Take the link set since the last call, if it changed.
    pub(crate) fn take_pending_link(&mut self) -> Option<String> {
        self.pending_link.take()
    }
}

impl StyleTarget for EditorSurface {
    fn apply_inline(&mut self, style: &InlineStyle) {
        if &self.inline == style {
            return;
        }

        self.font = editor_font(style, &mut self.names);
        self.inline = style.clone();
    }

    fn upsert_link(&mut self, id: &str, href: &str) {
        if id != FONT_LINK_ID {
            log::debug!("ignoring unknown link id `{id}`");
            return;
        }

        if self.link.as_deref() == Some(href) {
            return;
        }

        log::debug!("font link updated: {href}");
        self.link = Some(href.to_string());
        self.pending_link = Some(href.to_string());
    }
}

#[cfg(test)]
mod tests {
    use glyphpad_core::{FONT_LINK_ID, FontStyle, InlineStyle, StyleTarget};
    use iced::font::Style;

    use super::EditorSurface;

    #[test]
    fn given_new_link_when_upserted_then_pending_once() {
        let mut surface = EditorSurface::default();

        surface.upsert_link(FONT_LINK_ID, "file:///fonts/a.ttf");
        surface.upsert_link(FONT_LINK_ID, "file:///fonts/a.ttf");

        assert_eq!(
            surface.take_pending_link().as_deref(),
            Some("file:///fonts/a.ttf")
        );
        assert_eq!(surface.take_pending_link(), None);
        assert_eq!(surface.link(), Some("file:///fonts/a.ttf"));
    }

    #[test]
    fn given_italic_inline_style_when_applied_then_font_is_italic() {
        let mut surface = EditorSurface::default();
        let style = InlineStyle {
            family: String::from("Roboto"),
            weight: String::from("400"),
            style: FontStyle::Italic,
        };

        surface.apply_inline(&style);

        assert_eq!(surface.inline(), &style);
        assert_eq!(surface.font().style, Style::Italic);
    }

    #[test]
    fn given_foreign_link_id_when_upserted_then_ignored() {
        let mut surface = EditorSurface::default();

        surface.upsert_link("other-link", "file:///fonts/a.ttf");

        assert_eq!(surface.link(), None);
        assert_eq!(surface.take_pending_link(), None);
    }
}
