use std::fmt;

use iced::Font;
use iced::widget::text_editor;

/// Label of the family selector entry that clears the family.
pub(crate) const UNSET_FAMILY_LABEL: &str = "Select Font Family";

/// Entry of the family selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FamilyChoice {
    /// Return the family to unselected.
    Unset,
    Family(String),
}

impl FamilyChoice {
    /// Family name carried by the entry; empty for [`FamilyChoice::Unset`].
    pub(crate) fn into_name(self) -> String {
        match self {
            FamilyChoice::Unset => String::new(),
            FamilyChoice::Family(name) => name,
        }
    }
}

impl fmt::Display for FamilyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamilyChoice::Unset => f.write_str(UNSET_FAMILY_LABEL),
            FamilyChoice::Family(name) => f.write_str(name),
        }
    }
}

/// Read-only data the editor form renders from.
pub(crate) struct EditorViewModel<'a> {
    pub(crate) family_names: Vec<&'a str>,
    pub(crate) family: &'a str,
    pub(crate) weight_options: Vec<&'a str>,
    pub(crate) weight: &'a str,
    pub(crate) italic: bool,
    pub(crate) italic_available: bool,
    pub(crate) content: &'a text_editor::Content,
    pub(crate) font: Font,
}

impl EditorViewModel<'_> {
    /// The weight selector only opens once a family is chosen.
    pub(crate) fn weight_enabled(&self) -> bool {
        !self.family.is_empty()
    }

    /// Family selector entries: the clearing entry, then catalog order.
    pub(crate) fn family_choices(&self) -> Vec<FamilyChoice> {
        std::iter::once(FamilyChoice::Unset)
            .chain(
                self.family_names
                    .iter()
                    .map(|name| FamilyChoice::Family(name.to_string())),
            )
            .collect()
    }

    /// Selected family entry; `None` shows the placeholder.
    pub(crate) fn selected_family(&self) -> Option<FamilyChoice> {
        (!self.family.is_empty())
            .then(|| FamilyChoice::Family(self.family.to_string()))
    }
}
