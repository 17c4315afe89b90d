//! Veneer Platform Abstraction Layer
//!
//! The window-side contract surfaces are written against. Desktop, test and
//! headless hosts implement [`WindowHost`]; surfaces never talk to native
//! APIs directly.

pub mod cursor;
pub mod error;
pub mod host;
pub mod input;
pub mod window;

pub use cursor::Cursor;
pub use error::{PlatformError, Result};
pub use host::WindowHost;
pub use input::{MouseButton, ResizeEdge};
pub use window::{BorderStyle, WindowConfig, WindowState};
