//! Host window abstraction
//!
//! Everything a surface needs from the platform window it is drawn into.
//! Coordinates are physical pixels: points and sizes relative to the client
//! area, rectangles of windows and screens in desktop space.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::input::ResizeEdge;
use crate::window::{BorderStyle, WindowState};
use veneer_paint::{Color, EstimatedMetrics, Font, IntPoint, IntRect, IntSize, TextMeasurer};

/// Window or widget host a surface is attached to
pub trait WindowHost {
    /// Whether a native window exists yet
    fn has_handle(&self) -> bool;

    /// Whether the host is a top-level window whose chrome can be replaced
    fn is_top_level(&self) -> bool;

    /// Whether the host is a child window inside a parent container
    fn is_mdi_child(&self) -> bool {
        false
    }

    fn client_size(&self) -> IntSize;

    /// Pointer position relative to the client area
    fn pointer_position(&self) -> IntPoint;

    /// Whether a child control sits under `point`
    fn has_child_at(&self, _point: IntPoint) -> bool {
        false
    }

    /// Give up pointer capture held by the surface
    fn release_capture(&self);

    /// Hand the pointer to the platform's window-move loop
    fn begin_native_move(&self) -> Result<()>;

    /// Hand the pointer to the platform's window-resize loop
    fn begin_native_resize(&self, edge: ResizeEdge) -> Result<()>;

    fn window_state(&self) -> WindowState;

    fn window_bounds(&self) -> IntRect;

    fn set_window_bounds(&self, bounds: IntRect);

    /// Usable area of the screen showing the window
    fn working_area(&self) -> IntRect;

    /// Client area of the parent container, for child windows
    fn parent_area(&self) -> Option<IntRect> {
        None
    }

    /// Bounds of the primary screen
    fn primary_screen(&self) -> IntRect;

    fn set_cursor(&self, cursor: Cursor);

    fn request_redraw(&self);

    /// Background the host clears to behind the surface
    fn set_background(&self, color: Color);

    fn set_border_style(&self, style: BorderStyle);

    /// Measure `text` with the host's text stack
    fn measure_text(&self, text: &str, font: &Font, max_width: Option<i32>) -> IntSize {
        EstimatedMetrics::default().measure(text, font, max_width)
    }
}
