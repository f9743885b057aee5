use std::collections::HashMap;

use glyphpad_core::{FontStyle, InlineStyle};
use iced::Font;
use iced::font::{Family, Style, Weight};

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 14.0,
        }
    }
}

/// Text area font configuration.
#[derive(Debug, Clone)]
pub(crate) struct EditorFonts {
    pub(crate) size: f32,
}

impl Default for EditorFonts {
    fn default() -> Self {
        Self { size: 18.0 }
    }
}

/// Combined font configuration for controls and the text area.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) editor: EditorFonts,
}

/// Hands out `'static` family names for [`Family::Name`].
///
/// Each distinct name is leaked once; the set is bounded by the catalog plus
/// whatever family the restored settings carried.
#[derive(Debug, Default)]
pub(crate) struct FamilyNames {
    names: HashMap<String, &'static str>,
}

impl FamilyNames {
    pub(crate) fn intern(&mut self, name: &str) -> &'static str {
        if let Some(interned) = self.names.get(name) {
            return *interned;
        }

        let interned: &'static str =
            Box::leak(name.to_owned().into_boxed_str());
        self.names.insert(name.to_owned(), interned);
        interned
    }
}

/// Build the text area font for an inline style.
pub(crate) fn editor_font(
    style: &InlineStyle,
    names: &mut FamilyNames,
) -> Font {
    let family = if style.family.trim().is_empty() {
        Font::default().family
    } else {
        Family::Name(names.intern(&style.family))
    };

    Font {
        family,
        weight: font_weight(&style.weight),
        style: match style.style {
            FontStyle::Normal => Style::Normal,
            FontStyle::Italic => Style::Italic,
        },
        ..Font::default()
    }
}

/// Map a catalog weight label (`100`..`900`, `regular`, `bold`) to a weight.
pub(crate) fn font_weight(label: &str) -> Weight {
    match label.trim().to_ascii_lowercase().as_str() {
        "" | "regular" | "normal" => Weight::Normal,
        "thin" => Weight::Thin,
        "light" => Weight::Light,
        "medium" => Weight::Medium,
        "bold" => Weight::Bold,
        "black" => Weight::Black,
        other => other
            .parse::<u16>()
            .map(numeric_weight)
            .unwrap_or(Weight::Normal),
    }
}

fn numeric_weight(value: u16) -> Weight {
    match value.clamp(100, 900).div_ceil(100) {
        1 => Weight::Thin,
        2 => Weight::ExtraLight,
        3 => Weight::Light,
        4 => Weight::Normal,
        5 => Weight::Medium,
        6 => Weight::Semibold,
        7 => Weight::Bold,
        8 => Weight::ExtraBold,
        _ => Weight::Black,
    }
}
