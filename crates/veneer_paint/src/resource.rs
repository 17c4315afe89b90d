//! Pens and brushes derived from colors

use crate::color::Color;
use crate::context::{FillStyle, StrokeStyle};

/// Solid stroke resource
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f32,
}

impl Pen {
    pub const fn new(color: Color) -> Self {
        Self { color, width: 1.0 }
    }

    pub const fn with_width(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl From<Pen> for StrokeStyle {
    fn from(pen: Pen) -> Self {
        StrokeStyle {
            color: pen.color,
            width: pen.width,
            ..Default::default()
        }
    }
}

/// Fill resource; solid colors and gradients share one type
pub type Brush = FillStyle;

impl Brush {
    pub fn solid(color: Color) -> Self {
        FillStyle::Color(color)
    }
}
