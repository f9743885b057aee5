use crate::catalog::FontCatalog;
use crate::selection::Selection;

/// Fixed identifier of the single font resource link.
pub const FONT_LINK_ID: &str = "font-link";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn from_italic(italic: bool) -> Self {
        if italic { Self::Italic } else { Self::Normal }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// Visual properties pushed onto the text surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub family: String,
    pub weight: String,
    pub style: FontStyle,
}

impl InlineStyle {
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            family: selection.family.clone(),
            weight: selection.weight.clone(),
            style: FontStyle::from_italic(selection.italic),
        }
    }
}

/// Whether the applicator also maintains the font resource link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleMode {
    InlineOnly,
    #[default]
    WithStylesheetLink,
}

/// Surface receiving the resolved style.
pub trait StyleTarget {
    /// Replace the inline font properties of the text surface.
    fn apply_inline(&mut self, style: &InlineStyle);

    /// Insert the link with `id`, or update its target in place.
    fn upsert_link(&mut self, id: &str, href: &str);
}

/// Push the style derived from `selection` onto `target`.
///
/// Inline properties always follow the selection. The resource link is only
/// touched when the catalog resolves a URL for the current variant.
pub fn apply_style<T>(
    selection: &Selection,
    catalog: &FontCatalog,
    mode: StyleMode,
    target: &mut T,
) where
    T: StyleTarget + ?Sized,
{
    target.apply_inline(&InlineStyle::from_selection(selection));

    if mode == StyleMode::InlineOnly {
        return;
    }

    match catalog.resolve_url(
        &selection.family,
        &selection.weight,
        selection.italic,
    ) {
        Some(href) => target.upsert_link(FONT_LINK_ID, href),
        None => log::debug!(
            "no font resource for `{}` `{}` italic={}",
            selection.family,
            selection.weight,
            selection.italic
        ),
    }
}
