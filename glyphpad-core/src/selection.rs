use serde::{Deserialize, Serialize};

use crate::catalog::{FontCatalog, FontFamily, variant_key};

/// How weight and italic react when the family changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyChangePolicy {
    /// Clear weight and italic unconditionally.
    #[default]
    Reset,
    /// Keep the nearest weight/italic combination the new family offers.
    ClosestMatch,
}

/// The user's current font choices and text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub family: String,
    pub weight: String,
    pub italic: bool,
    pub text: String,
}

impl Selection {
    pub fn has_family(&self) -> bool {
        !self.family.is_empty()
    }
}

/// Owns the [`Selection`] and mutates it against a read-only catalog.
#[derive(Debug, Clone)]
pub struct SelectionManager {
    catalog: FontCatalog,
    policy: FamilyChangePolicy,
    selection: Selection,
}

impl SelectionManager {
    pub fn new(catalog: FontCatalog, policy: FamilyChangePolicy) -> Self {
        Self {
            catalog,
            policy,
            selection: Selection::default(),
        }
    }

    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> FamilyChangePolicy {
        self.policy
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the whole selection, e.g. with restored settings.
    pub fn restore(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Set the family and adjust weight/italic per the configured policy.
    pub fn set_family(&mut self, name: impl Into<String>) {
        let name = name.into();
        let (weight, italic) = match self.policy {
            FamilyChangePolicy::Reset => (String::new(), false),
            FamilyChangePolicy::ClosestMatch => closest_match(
                self.catalog.family(&name),
                &self.selection.weight,
                self.selection.italic,
            ),
        };

        log::debug!(
            "family changed to `{name}` ({:?}): weight=`{weight}` italic={italic}",
            self.policy
        );
        self.selection.family = name;
        self.selection.weight = weight;
        self.selection.italic = italic;
    }

    /// Set the weight verbatim. Availability is not checked.
    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.selection.weight = weight.into();
    }

    pub fn toggle_italic(&mut self) {
        self.selection.italic = !self.selection.italic;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.selection.text = text.into();
    }

    /// Clear every field back to its default.
    pub fn reset(&mut self) {
        self.selection = Selection::default();
    }

    /// Variant keys of `family`, catalog order.
    pub fn available_weights(&self, family: &str) -> Vec<&str> {
        self.catalog.available_weights(family)
    }

    /// Weight labels offered for the current family.
    pub fn weight_options(&self) -> Vec<&str> {
        self.catalog.weight_options(&self.selection.family)
    }

    /// Whether the italic toggle should be enabled for the current family.
    pub fn italic_available(&self) -> bool {
        self.catalog.italic_available(&self.selection.family)
    }

    pub fn resolve_url(
        &self,
        family: &str,
        weight: &str,
        italic: bool,
    ) -> Option<&str> {
        self.catalog.resolve_url(family, weight, italic)
    }

    /// Resource URL for the current selection, if the catalog has one.
    pub fn current_url(&self) -> Option<&str> {
        let selection = &self.selection;
        self.resolve_url(&selection.family, &selection.weight, selection.italic)
    }
}

fn closest_match(
    family: Option<&FontFamily>,
    weight: &str,
    italic: bool,
) -> (String, bool) {
    let Some(family) = family else {
        return (String::new(), false);
    };

    if family.variant(&variant_key(weight, italic)).is_some() {
        return (weight.to_string(), italic);
    }

    if italic {
        if let Some(variant) = family.first_italic() {
            return (variant.weight().to_string(), true);
        }
    }

    match family.first_upright().or_else(|| family.first()) {
        Some(variant) => (variant.weight().to_string(), false),
        None => (String::new(), false),
    }
}
