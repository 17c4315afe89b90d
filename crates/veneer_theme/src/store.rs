//! Per-surface named color table

use crate::bloom::Bloom;
use crate::customization::{decode_customization, encode_customization};
use crate::error::{Result, ThemeError};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use veneer_paint::{Brush, Color, Pen};

/// Ordered map from semantic color name to color
///
/// Iteration follows first-registration order, which is also the word order
/// of [`ColorStore::customization`]. Pens and brushes are built fresh on
/// every call; callers decide what to cache.
#[derive(Clone, Debug, Default)]
pub struct ColorStore {
    colors: IndexMap<String, Color, FxBuildHasher>,
}

impl ColorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`
    pub fn set_color(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    pub fn set_color_rgb(&mut self, name: impl Into<String>, r: u8, g: u8, b: u8) {
        self.set_color(name, Color::from_rgb8(r, g, b));
    }

    pub fn set_color_argb(&mut self, name: impl Into<String>, a: u8, r: u8, g: u8, b: u8) {
        self.set_color(name, Color::from_rgba8(r, g, b, a));
    }

    /// Store `base` with its alpha replaced
    pub fn set_color_alpha(&mut self, name: impl Into<String>, alpha: u8, base: Color) {
        self.set_color(name, base.with_alpha8(alpha));
    }

    pub fn get_color(&self, name: &str) -> Result<Color> {
        self.colors
            .get(name)
            .copied()
            .ok_or_else(|| ThemeError::UnknownColor(name.to_string()))
    }

    pub fn get_pen(&self, name: &str) -> Result<Pen> {
        self.get_color(name).map(Pen::new)
    }

    pub fn get_pen_width(&self, name: &str, width: f32) -> Result<Pen> {
        self.get_color(name).map(|c| Pen::with_width(c, width))
    }

    pub fn get_brush(&self, name: &str) -> Result<Brush> {
        self.get_color(name).map(Brush::solid)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Snapshot of every entry in table order
    pub fn blooms(&self) -> Vec<Bloom> {
        self.colors
            .iter()
            .map(|(name, color)| Bloom::new(name.clone(), *color))
            .collect()
    }

    /// Copy values back from `blooms`; unknown names are skipped
    ///
    /// Returns how many entries were updated.
    pub fn apply_blooms(&mut self, blooms: &[Bloom]) -> usize {
        blooms
            .iter()
            .filter(|bloom| match self.colors.get_mut(&bloom.name) {
                Some(slot) => {
                    *slot = bloom.value;
                    true
                }
                None => false,
            })
            .count()
    }

    /// Base64 of every color as a little-endian ARGB word
    pub fn customization(&self) -> String {
        encode_customization(self.colors.values())
    }

    /// Overwrite every color from a customization string
    ///
    /// Malformed input, including a word count that differs from the table
    /// size, leaves the table untouched and returns `false`.
    pub fn set_customization(&mut self, encoded: &str) -> bool {
        match decode_customization(encoded, self.colors.len()) {
            Ok(colors) => {
                for (slot, color) in self.colors.values_mut().zip(colors) {
                    *slot = color;
                }
                tracing::debug!(entries = self.colors.len(), "customization applied");
                true
            }
            Err(e) => {
                tracing::debug!("customization rejected: {e}");
                false
            }
        }
    }
}
