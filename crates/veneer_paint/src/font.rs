//! Font description and text metrics

use crate::primitives::IntSize;

/// Font family and size in pixels
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Verdana", 8.0)
    }
}

/// Measures laid-out text
///
/// Hosts with a real text stack implement this; [`EstimatedMetrics`] is the
/// fallback when none is available.
pub trait TextMeasurer {
    /// Size of `text` rendered in `font`, wrapped at `max_width` when given
    fn measure(&self, text: &str, font: &Font, max_width: Option<i32>) -> IntSize;
}

/// Fixed-advance approximation: every glyph is `advance × size` wide
#[derive(Clone, Copy, Debug)]
pub struct EstimatedMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for EstimatedMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for EstimatedMetrics {
    fn measure(&self, text: &str, font: &Font, max_width: Option<i32>) -> IntSize {
        if text.is_empty() {
            return IntSize::ZERO;
        }

        let glyph = font.size * self.advance;
        let line = ceil_px(font.size * self.line_height);
        let natural = ceil_px(text.chars().count() as f32 * glyph);

        match max_width {
            Some(limit) if limit > 0 && natural > limit => {
                let lines = (natural + limit - 1) / limit;
                IntSize::new(limit, line * lines)
            }
            _ => IntSize::new(natural, line),
        }
    }
}

// Round up to whole pixels, ignoring float noise below a thousandth.
fn ceil_px(value: f32) -> i32 {
    (value - 1e-3).ceil() as i32
}
