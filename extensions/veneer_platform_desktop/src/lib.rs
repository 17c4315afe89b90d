//! Veneer Desktop Platform
//!
//! winit windows as surface hosts for macOS, Windows, and Linux.

pub mod event_loop;
pub mod host;
pub mod logging;

pub use event_loop::{DesktopEventLoop, WakeProxy};
pub use host::DesktopHost;
pub use logging::init_logging;
