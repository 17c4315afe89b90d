//! winit window as a surface host

use raw_window_handle::HasWindowHandle;
use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};
use std::sync::Arc;
use veneer_paint::{Color, IntPoint, IntRect, IntSize};
use veneer_platform::{
    BorderStyle, Cursor, PlatformError, ResizeEdge, Result, WindowHost, WindowState,
};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::monitor::MonitorHandle;
use winit::window::{CursorIcon, ResizeDirection, Window as WinitWindow};

#[derive(Default)]
struct HostState {
    pointer_x: AtomicI32,
    pointer_y: AtomicI32,
    background: AtomicU32,
}

/// Top-level desktop window hosting one surface
///
/// Clones share the window and the pointer/background state, so the event
/// loop can keep a handle while the surface owns another.
#[derive(Clone)]
pub struct DesktopHost {
    window: Arc<WinitWindow>,
    state: Arc<HostState>,
}

impl DesktopHost {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self {
            window,
            state: Arc::new(HostState::default()),
        }
    }

    /// Get the underlying winit window
    pub fn winit_window(&self) -> &WinitWindow {
        &self.window
    }

    /// Record the pointer position (called by the event loop)
    pub(crate) fn set_pointer(&self, point: IntPoint) {
        self.state.pointer_x.store(point.x, Ordering::Relaxed);
        self.state.pointer_y.store(point.y, Ordering::Relaxed);
    }

    /// Background last pushed by the surface; renderers clear to it
    pub fn background(&self) -> Color {
        Color::from_argb(self.state.background.load(Ordering::Relaxed))
    }
}

impl WindowHost for DesktopHost {
    fn has_handle(&self) -> bool {
        self.window.window_handle().is_ok()
    }

    fn is_top_level(&self) -> bool {
        true
    }

    fn client_size(&self) -> IntSize {
        to_int_size(self.window.inner_size())
    }

    fn pointer_position(&self) -> IntPoint {
        IntPoint::new(
            self.state.pointer_x.load(Ordering::Relaxed),
            self.state.pointer_y.load(Ordering::Relaxed),
        )
    }

    fn release_capture(&self) {
        // winit releases the pointer itself when a drag starts
    }

    fn begin_native_move(&self) -> Result<()> {
        self.window
            .drag_window()
            .map_err(|e| PlatformError::WindowOperation(e.to_string()))
    }

    fn begin_native_resize(&self, edge: ResizeEdge) -> Result<()> {
        self.window
            .drag_resize_window(resize_direction(edge))
            .map_err(|e| PlatformError::WindowOperation(e.to_string()))
    }

    fn window_state(&self) -> WindowState {
        if self.window.is_minimized() == Some(true) {
            WindowState::Minimized
        } else if self.window.is_maximized() {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }

    fn window_bounds(&self) -> IntRect {
        let position = self.window.outer_position().unwrap_or_default();
        IntRect::from_origin_size(
            IntPoint::new(position.x, position.y),
            to_int_size(self.window.outer_size()),
        )
    }

    /// `bounds` is the outer frame; native decorations are subtracted before
    /// the inner size is requested so it round-trips with [`Self::window_bounds`]
    fn set_window_bounds(&self, bounds: IntRect) {
        self.window
            .set_outer_position(PhysicalPosition::new(bounds.x, bounds.y));
        let frame = decoration_extent(self.window.outer_size(), self.window.inner_size());
        let requested = inner_request(bounds.size(), frame);
        if self.window.request_inner_size(requested).is_none() {
            tracing::trace!(?bounds, "resize applied asynchronously");
        }
    }

    /// winit has no work-area query; the whole monitor stands in for it
    fn working_area(&self) -> IntRect {
        self.window
            .current_monitor()
            .map(monitor_rect)
            .unwrap_or_else(|| self.primary_screen())
    }

    fn primary_screen(&self) -> IntRect {
        self.window
            .primary_monitor()
            .or_else(|| self.window.current_monitor())
            .map(monitor_rect)
            .unwrap_or_else(|| IntRect::from_origin_size(IntPoint::ZERO, self.client_size()))
    }

    fn set_cursor(&self, cursor: Cursor) {
        let icon = match cursor {
            Cursor::Default => CursorIcon::Default,
            Cursor::Pointer => CursorIcon::Pointer,
            Cursor::Text => CursorIcon::Text,
            Cursor::Crosshair => CursorIcon::Crosshair,
            Cursor::Move => CursorIcon::Move,
            Cursor::NotAllowed => CursorIcon::NotAllowed,
            Cursor::ResizeNS => CursorIcon::NsResize,
            Cursor::ResizeEW => CursorIcon::EwResize,
            Cursor::ResizeNESW => CursorIcon::NeswResize,
            Cursor::ResizeNWSE => CursorIcon::NwseResize,
            Cursor::Wait => CursorIcon::Wait,
            Cursor::Progress => CursorIcon::Progress,
            Cursor::None => {
                self.window.set_cursor_visible(false);
                return;
            }
        };
        self.window.set_cursor_visible(true);
        self.window.set_cursor(icon);
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }

    fn set_background(&self, color: Color) {
        self.state
            .background
            .store(color.to_argb(), Ordering::Relaxed);
    }

    fn set_border_style(&self, style: BorderStyle) {
        self.window.set_decorations(style == BorderStyle::Native);
    }
}

fn to_int_size(size: PhysicalSize<u32>) -> IntSize {
    IntSize::new(
        i32::try_from(size.width).unwrap_or(i32::MAX),
        i32::try_from(size.height).unwrap_or(i32::MAX),
    )
}

/// Size the native frame adds around the client area
fn decoration_extent(outer: PhysicalSize<u32>, inner: PhysicalSize<u32>) -> IntSize {
    let outer = to_int_size(outer);
    let inner = to_int_size(inner);
    IntSize::new(
        (outer.width - inner.width).max(0),
        (outer.height - inner.height).max(0),
    )
}

fn inner_request(outer: IntSize, frame: IntSize) -> PhysicalSize<u32> {
    PhysicalSize::new(
        (outer.width - frame.width).max(0) as u32,
        (outer.height - frame.height).max(0) as u32,
    )
}

fn monitor_rect(monitor: MonitorHandle) -> IntRect {
    let position = monitor.position();
    IntRect::from_origin_size(
        IntPoint::new(position.x, position.y),
        to_int_size(monitor.size()),
    )
}

pub(crate) fn resize_direction(edge: ResizeEdge) -> ResizeDirection {
    match edge {
        ResizeEdge::Left => ResizeDirection::West,
        ResizeEdge::Right => ResizeDirection::East,
        ResizeEdge::Top => ResizeDirection::North,
        ResizeEdge::Bottom => ResizeDirection::South,
        ResizeEdge::TopLeft => ResizeDirection::NorthWest,
        ResizeEdge::TopRight => ResizeDirection::NorthEast,
        ResizeEdge::BottomLeft => ResizeDirection::SouthWest,
        ResizeEdge::BottomRight => ResizeDirection::SouthEast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_map_to_compass_directions() {
        assert_eq!(resize_direction(ResizeEdge::TopLeft), ResizeDirection::NorthWest);
        assert_eq!(resize_direction(ResizeEdge::Bottom), ResizeDirection::South);
        assert_eq!(resize_direction(ResizeEdge::Right), ResizeDirection::East);
    }

    #[test]
    fn outer_bounds_lose_the_native_frame_before_the_inner_request() {
        let frame = decoration_extent(PhysicalSize::new(816, 639), PhysicalSize::new(800, 600));
        assert_eq!(frame, IntSize::new(16, 39));
        assert_eq!(
            inner_request(IntSize::new(400, 300), frame),
            PhysicalSize::new(384, 261)
        );

        let borderless = decoration_extent(PhysicalSize::new(640, 420), PhysicalSize::new(640, 420));
        assert_eq!(
            inner_request(IntSize::new(640, 420), borderless),
            PhysicalSize::new(640, 420)
        );
        assert_eq!(
            inner_request(IntSize::new(10, 10), frame),
            PhysicalSize::new(0, 0)
        );
    }

    #[test]
    fn oversized_physical_sizes_saturate() {
        assert_eq!(
            to_int_size(PhysicalSize::new(u32::MAX, 10)),
            IntSize::new(i32::MAX, 10)
        );
    }
}
