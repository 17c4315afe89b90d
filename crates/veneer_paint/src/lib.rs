//! Veneer Paint API
//!
//! A small 2D drawing vocabulary shared by every surface and skin.
//!
//! # Features
//!
//! - ARGB colors with lossless 32-bit packing
//! - Integer pixel geometry for hit testing, float geometry for drawing
//! - Path building (lines, arcs, rounded rectangles)
//! - Linear and radial gradients, multi-stop color blends
//! - Recorded paint commands, replayed by a renderer outside this crate
//! - Offscreen bitmaps for composited transparency

pub mod bitmap;
pub mod color;
pub mod context;
pub mod font;
pub mod gradient;
pub mod path;
pub mod primitives;
pub mod resource;

pub use bitmap::{Bitmap, BitmapId, Image};
pub use color::Color;
pub use context::{FillStyle, LineCap, LineJoin, PaintCommand, PaintContext, StrokeStyle};
pub use font::{EstimatedMetrics, Font, TextMeasurer};
pub use gradient::{ColorBlend, Gradient, GradientStop};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
pub use resource::{Brush, Pen};
