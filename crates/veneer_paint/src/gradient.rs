//! Gradient fills

use crate::color::Color;
use crate::path::Point;
use crate::primitives::Rect;

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Multi-stop interpolation table, in the order the stops were added
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorBlend {
    stops: Vec<GradientStop>,
}

impl ColorBlend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors spread evenly from 0.0 to 1.0
    pub fn even(colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Self {
            stops: colors
                .iter()
                .enumerate()
                .map(|(i, c)| GradientStop::new(i as f32 / last, *c))
                .collect(),
        }
    }

    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop::new(offset.clamp(0.0, 1.0), color));
        self
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Gradient type
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    /// Elliptical gradient; stops run from the ellipse edge (0.0) to `focus` (1.0)
    ///
    /// `focus` may sit anywhere inside the ellipse; the edge stays put.
    Radial {
        center: Point,
        radius_x: f32,
        radius_y: f32,
        focus: Point,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Create a simple linear gradient between two colors
    pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Linear gradient spanning `rect` along `angle_degrees`
    ///
    /// Angles run clockwise from the +x axis, so 90° paints top to bottom.
    /// The axis is sized so both stop extremes touch opposite corners.
    pub fn linear_in_rect(rect: Rect, angle_degrees: f32, stops: Vec<GradientStop>) -> Self {
        let theta = angle_degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let half = (rect.width / 2.0 * cos).abs() + (rect.height / 2.0 * sin).abs();
        let c = rect.center();
        Gradient::Linear {
            start: Point::new(c.x - cos * half, c.y - sin * half),
            end: Point::new(c.x + cos * half, c.y + sin * half),
            stops,
        }
    }

    /// Radial gradient over the ellipse inscribed in `rect`, converging on `focus`
    pub fn radial_in_rect(rect: Rect, focus: Point, stops: Vec<GradientStop>) -> Self {
        Gradient::Radial {
            center: rect.center(),
            radius_x: rect.width / 2.0,
            radius_y: rect.height / 2.0,
            focus,
            stops,
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_gradient_spans_rect_height() {
        let g = Gradient::linear_in_rect(
            Rect::new(0.0, 0.0, 100.0, 40.0),
            90.0,
            vec![
                GradientStop::new(0.0, Color::WHITE),
                GradientStop::new(1.0, Color::BLACK),
            ],
        );
        match g {
            Gradient::Linear { start, end, .. } => {
                assert!((start.x - 50.0).abs() < 1e-3);
                assert!(start.y.abs() < 1e-3);
                assert!((end.y - 40.0).abs() < 1e-3);
            }
            other => panic!("expected linear gradient, got {other:?}"),
        }
    }

    #[test]
    fn radial_edge_follows_the_rect_not_the_focus() {
        let rect = Rect::new(0.0, 0.0, 99.0, 49.0);
        let g = Gradient::radial_in_rect(rect, Point::new(10.0, 10.0), Vec::new());
        match g {
            Gradient::Radial {
                center,
                radius_x,
                radius_y,
                focus,
                ..
            } => {
                assert_eq!(center, Point::new(49.5, 24.5));
                assert_eq!((radius_x, radius_y), (49.5, 24.5));
                assert_eq!(focus, Point::new(10.0, 10.0));
            }
            other => panic!("expected radial gradient, got {other:?}"),
        }
    }

    #[test]
    fn even_blend_spreads_offsets() {
        let blend = ColorBlend::even(&[Color::WHITE, Color::BLACK, Color::WHITE]);
        let offsets: Vec<f32> = blend.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }
}
