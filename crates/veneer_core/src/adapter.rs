//! Container and leaf host capabilities
//!
//! A surface is either a container that can take over a top-level window's
//! chrome, or a leaf embedded in someone else's window. The difference is
//! confined to [`HostAdapter`].

use veneer_platform::{BorderStyle, PlatformError, ResizeEdge, Result, WindowHost};

/// Capabilities that differ between container and leaf surfaces
pub trait HostAdapter {
    /// Whether a transparent surface composites through its own bitmap
    fn owns_compositing(&self) -> bool;

    /// Whether the surface's background is pushed to the host window
    fn propagates_background(&self) -> bool;

    /// Take over the host window's chrome
    ///
    /// `Ok(false)` means this surface never owns chrome. Errors mean it
    /// wanted to but the host cannot support it yet.
    fn wire_chrome(&self, host: &dyn WindowHost, border: BorderStyle) -> Result<bool>;

    /// Release capture and hand the pointer to the native move loop
    fn begin_native_move(&self, host: &dyn WindowHost) -> Result<()>;

    /// Release capture and hand the pointer to the native resize loop
    fn begin_native_resize(&self, host: &dyn WindowHost, edge: ResizeEdge) -> Result<()>;
}

/// Surface that fills a top-level window and draws its chrome
///
/// In control mode it behaves like a leaf: no chrome, its own compositing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContainerAdapter {
    pub control_mode: bool,
}

impl ContainerAdapter {
    pub fn new(control_mode: bool) -> Self {
        Self { control_mode }
    }
}

impl HostAdapter for ContainerAdapter {
    fn owns_compositing(&self) -> bool {
        self.control_mode
    }

    fn propagates_background(&self) -> bool {
        !self.control_mode
    }

    fn wire_chrome(&self, host: &dyn WindowHost, border: BorderStyle) -> Result<bool> {
        if self.control_mode {
            return Ok(false);
        }
        if !host.has_handle() {
            return Err(PlatformError::NoHandle);
        }
        if !host.is_top_level() {
            return Err(PlatformError::NotContainer);
        }
        host.set_border_style(border);
        Ok(true)
    }

    fn begin_native_move(&self, host: &dyn WindowHost) -> Result<()> {
        host.release_capture();
        host.begin_native_move()
    }

    fn begin_native_resize(&self, host: &dyn WindowHost, edge: ResizeEdge) -> Result<()> {
        host.release_capture();
        host.begin_native_resize(edge)
    }
}

/// Ordinary embedded widget
#[derive(Clone, Copy, Debug, Default)]
pub struct LeafAdapter;

impl HostAdapter for LeafAdapter {
    fn owns_compositing(&self) -> bool {
        true
    }

    fn propagates_background(&self) -> bool {
        false
    }

    fn wire_chrome(&self, _host: &dyn WindowHost, _border: BorderStyle) -> Result<bool> {
        Ok(false)
    }

    fn begin_native_move(&self, _host: &dyn WindowHost) -> Result<()> {
        Err(PlatformError::Unsupported("leaf surfaces cannot move their host".into()))
    }

    fn begin_native_resize(&self, _host: &dyn WindowHost, _edge: ResizeEdge) -> Result<()> {
        Err(PlatformError::Unsupported("leaf surfaces cannot resize their host".into()))
    }
}
