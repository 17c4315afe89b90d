//! Path building and representation

use crate::primitives::Rect;
use smallvec::SmallVec;
use std::f32::consts::PI;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        control: Point,
        end: Point,
    },
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Elliptical arc inscribed in `bounds`, angles in radians, clockwise from +x
    ArcTo {
        bounds: Rect,
        start_angle: f32,
        sweep_angle: f32,
    },
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Rounded rectangle made of four corner arcs, each `slope` pixels across
    ///
    /// The arcs run top-left, top-right, bottom-right, bottom-left and the
    /// figure is closed, so straight edges are implied between them.
    pub fn rounded_rect(rect: Rect, slope: f32) -> Path {
        let right = rect.x + rect.width;
        let bottom = rect.y + rect.height;
        PathBuilder::new()
            .arc_to(Rect::new(rect.x, rect.y, slope, slope), 180.0, 90.0)
            .arc_to(Rect::new(right - slope, rect.y, slope, slope), 270.0, 90.0)
            .arc_to(
                Rect::new(right - slope, bottom - slope, slope, slope),
                0.0,
                90.0,
            )
            .arc_to(Rect::new(rect.x, bottom - slope, slope, slope), 90.0, 90.0)
            .close()
            .build()
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::MoveTo(point));
        self.current = point;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::LineTo(point));
        self.current = point;
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        let end = Point::new(x, y);
        self.path.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end,
        });
        self.current = end;
        self
    }

    pub fn cubic_to(mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> Self {
        let end = Point::new(x, y);
        self.path.commands.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end,
        });
        self.current = end;
        self
    }

    /// Arc inscribed in `bounds`; angles are given in degrees
    pub fn arc_to(mut self, bounds: Rect, start_degrees: f32, sweep_degrees: f32) -> Self {
        let start_angle = start_degrees * PI / 180.0;
        let sweep_angle = sweep_degrees * PI / 180.0;
        self.path.commands.push(PathCommand::ArcTo {
            bounds,
            start_angle,
            sweep_angle,
        });
        let center = bounds.center();
        let end = start_angle + sweep_angle;
        self.current = Point::new(
            center.x + bounds.width / 2.0 * end.cos(),
            center.y + bounds.height / 2.0 * end.sin(),
        );
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    /// Last point the pen moved to
    pub fn current(&self) -> Point {
        self.current
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
