use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::CatalogError;

/// Marker appended to a weight label to name the italic variant.
pub const ITALIC_MARKER: &str = "italic";

/// One font resource inside a family, e.g. `400italic -> https://...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontVariant {
    key: String,
    url: String,
}

impl FontVariant {
    pub fn new(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
        }
    }

    /// Variant key as written in the catalog.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resource URL of the font file or stylesheet.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Return whether the key ends with the italic marker.
    pub fn is_italic(&self) -> bool {
        self.key.ends_with(ITALIC_MARKER)
    }

    /// Weight label with the italic suffix stripped.
    ///
    /// Uses the same suffix rule as [`FontVariant::is_italic`], so a marker
    /// elsewhere in the key is part of the weight label.
    pub fn weight(&self) -> &str {
        self.key.strip_suffix(ITALIC_MARKER).unwrap_or(&self.key)
    }
}

/// Named typeface group and its variants in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    name: String,
    variants: Vec<FontVariant>,
}

impl FontFamily {
    pub fn new<I, K, U>(name: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = (K, U)>,
        K: Into<String>,
        U: Into<String>,
    {
        Self {
            name: name.into(),
            variants: variants
                .into_iter()
                .map(|(key, url)| FontVariant::new(key, url))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &[FontVariant] {
        &self.variants
    }

    /// Find a variant by exact key.
    pub fn variant(&self, key: &str) -> Option<&FontVariant> {
        self.variants.iter().find(|variant| variant.key == key)
    }

    /// First variant carrying the italic marker.
    pub fn first_italic(&self) -> Option<&FontVariant> {
        self.variants.iter().find(|variant| variant.is_italic())
    }

    /// First variant without the italic marker.
    pub fn first_upright(&self) -> Option<&FontVariant> {
        self.variants.iter().find(|variant| !variant.is_italic())
    }

    /// First variant in catalog order.
    pub fn first(&self) -> Option<&FontVariant> {
        self.variants.first()
    }

    pub fn has_italic(&self) -> bool {
        self.first_italic().is_some()
    }
}

/// Read-only mapping of family name to variant map, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontCatalog {
    families: Vec<FontFamily>,
}

impl FontCatalog {
    pub fn new(families: Vec<FontFamily>) -> Self {
        Self { families }
    }

    /// Parse a catalog document shaped as `{ family: { key: url } }`.
    pub fn from_json_str(payload: &str) -> Result<Self, CatalogError> {
        let value = serde_json::from_str::<Value>(payload)?;
        Self::from_json(&value)
    }

    /// Read and parse a catalog document from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let payload = fs::read_to_string(path)?;
        Self::from_json_str(&payload)
    }

    pub fn from_json(value: &Value) -> Result<Self, CatalogError> {
        let Some(root) = value.as_object() else {
            return Err(shape_error("root is not an object"));
        };

        let mut families = Vec::with_capacity(root.len());
        for (name, variants) in root {
            let Some(variants) = variants.as_object() else {
                return Err(shape_error(format!(
                    "family `{name}` is not an object"
                )));
            };

            let mut parsed = Vec::with_capacity(variants.len());
            for (key, url) in variants {
                let Some(url) = url.as_str() else {
                    return Err(shape_error(format!(
                        "variant `{name}/{key}` is not a string"
                    )));
                };
                parsed.push(FontVariant::new(key.as_str(), url));
            }

            families.push(FontFamily {
                name: name.clone(),
                variants: parsed,
            });
        }

        Ok(Self { families })
    }

    pub fn families(&self) -> &[FontFamily] {
        &self.families
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Look up a family by name. An empty name is treated as unset.
    pub fn family(&self, name: &str) -> Option<&FontFamily> {
        if name.is_empty() {
            return None;
        }
        self.families.iter().find(|family| family.name == name)
    }

    /// Family names for the family selector, in catalog order.
    pub fn family_names(&self) -> Vec<&str> {
        self.families.iter().map(FontFamily::name).collect()
    }

    /// Variant keys of `family` in catalog order, or empty when unknown.
    pub fn available_weights(&self, family: &str) -> Vec<&str> {
        self.family(family)
            .map(|family| {
                family.variants.iter().map(FontVariant::key).collect()
            })
            .unwrap_or_default()
    }

    /// Weight labels for the weight selector: italic suffix stripped,
    /// duplicates dropped, catalog order kept.
    pub fn weight_options(&self, family: &str) -> Vec<&str> {
        let mut options: Vec<&str> = Vec::new();
        if let Some(family) = self.family(family) {
            for variant in &family.variants {
                let weight = variant.weight();
                if !options.contains(&weight) {
                    options.push(weight);
                }
            }
        }
        options
    }

    /// Whether the italic toggle makes sense for `family`.
    pub fn italic_available(&self, family: &str) -> bool {
        self.family(family).is_some_and(FontFamily::has_italic)
    }

    /// Resolve the resource URL of `weight` (+ italic marker) in `family`.
    pub fn resolve_url(
        &self,
        family: &str,
        weight: &str,
        italic: bool,
    ) -> Option<&str> {
        let key = variant_key(weight, italic);
        self.family(family)?.variant(&key).map(FontVariant::url)
    }
}

/// Build the catalog key naming a weight and optional italic variant.
pub(crate) fn variant_key(weight: &str, italic: bool) -> String {
    if italic {
        format!("{weight}{ITALIC_MARKER}")
    } else {
        weight.to_string()
    }
}

fn shape_error(message: impl Into<String>) -> CatalogError {
    CatalogError::Shape {
        message: message.into(),
    }
}
