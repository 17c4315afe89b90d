//! Paint context - the main drawing API

use crate::bitmap::{Bitmap, BitmapId, Image};
use crate::color::Color;
use crate::font::Font;
use crate::gradient::Gradient;
use crate::path::{Path, Point};
use crate::primitives::*;

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    /// Replace every pixel of the target with `color`
    Clear(Color),
    FillRect {
        rect: Rect,
        style: FillStyle,
    },
    StrokeRect {
        rect: Rect,
        style: StrokeStyle,
    },
    FillRoundedRect {
        rect: RoundedRect,
        style: FillStyle,
    },
    FillEllipse {
        ellipse: Ellipse,
        style: FillStyle,
    },
    FillPath {
        path: Path,
        style: FillStyle,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
    DrawText {
        text: String,
        position: Point,
        font: Font,
        style: FillStyle,
    },
    DrawImage {
        image: Image,
        rect: Rect,
    },
    /// Overwrite one pixel without blending; only meaningful on bitmaps
    SetPixel {
        x: i32,
        y: i32,
        color: Color,
    },
    /// Composite an offscreen bitmap's recorded content at `origin`
    DrawBitmap {
        id: BitmapId,
        origin: Point,
        size: IntSize,
        commands: Vec<PaintCommand>,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}

/// The paint context used for custom drawing
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    clip_stack: Vec<Rect>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            clip_stack: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        self.clip_stack.clear();
        std::mem::take(&mut self.commands)
    }

    /// Record a prepared command
    pub fn push(&mut self, command: PaintCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self, color: Color) {
        self.commands.push(PaintCommand::Clear(color));
    }

    // === Shape drawing ===

    pub fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: impl Into<FillStyle>,
    ) {
        self.commands.push(PaintCommand::FillRect {
            rect: Rect::new(x, y, width, height),
            style: style.into(),
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, style: impl Into<StrokeStyle>) {
        self.commands.push(PaintCommand::StrokeRect {
            rect,
            style: style.into(),
        });
    }

    pub fn fill_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        style: impl Into<FillStyle>,
    ) {
        self.commands.push(PaintCommand::FillRoundedRect {
            rect: RoundedRect {
                rect: Rect::new(x, y, width, height),
                corner_radius: CornerRadius::uniform(radius),
            },
            style: style.into(),
        });
    }

    pub fn fill_ellipse(&mut self, rect: Rect, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillEllipse {
            ellipse: Ellipse::inscribed(rect),
            style: style.into(),
        });
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillPath {
            path,
            style: style.into(),
        });
    }

    pub fn stroke_path(&mut self, path: Path, style: impl Into<StrokeStyle>) {
        self.commands.push(PaintCommand::StrokePath {
            path,
            style: style.into(),
        });
    }

    // === Text and images ===

    pub fn draw_text(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        font: &Font,
        style: impl Into<FillStyle>,
    ) {
        self.commands.push(PaintCommand::DrawText {
            text: text.into(),
            position: Point::new(x, y),
            font: font.clone(),
            style: style.into(),
        });
    }

    pub fn draw_image(&mut self, image: &Image, rect: Rect) {
        self.commands.push(PaintCommand::DrawImage {
            image: image.clone(),
            rect,
        });
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.commands.push(PaintCommand::SetPixel { x, y, color });
    }

    /// Composite a bitmap, consuming what was drawn into it
    pub fn draw_bitmap(&mut self, bitmap: &mut Bitmap, x: f32, y: f32) {
        let commands = bitmap.context().take_commands();
        self.commands.push(PaintCommand::DrawBitmap {
            id: bitmap.id(),
            origin: Point::new(x, y),
            size: bitmap.size(),
            commands,
        });
    }

    // === Clipping ===

    pub fn push_clip(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = Rect::new(x, y, width, height);
        self.clip_stack.push(rect);
        self.commands.push(PaintCommand::PushClip { rect });
    }

    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_some() {
            self.commands.push(PaintCommand::PopClip);
        }
    }

    /// Innermost active clip rectangle
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}
