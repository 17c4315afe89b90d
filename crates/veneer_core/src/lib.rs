//! Veneer Core
//!
//! Custom-drawn surfaces that replace native window chrome.
//!
//! # Features
//!
//! - **Surface**: container and leaf surfaces with a direct or composited paint path
//! - **Skin**: color registration, color and paint hooks supplied by concrete skins
//! - **Canvas**: pixel, corner, border, caption, image and gradient helpers
//! - **ChromeController**: edge hit testing and native move/resize delegation
//! - **SurfaceConfig**: TOML-loadable initial properties
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use veneer_animation::AnimationDispatcher;
//! use veneer_core::{Surface, SurfaceConfig};
//!
//! let dispatcher = Arc::new(AnimationDispatcher::new());
//! let mut surface = Surface::container(MySkin::default(), SurfaceConfig::default(), dispatcher)?;
//! surface.attach(Box::new(host))?;
//! surface.paint(&mut ctx);
//! ```

pub mod adapter;
pub mod canvas;
pub mod chrome;
pub mod config;
pub mod error;
pub mod geometry;
pub mod skin;
pub mod state;
pub mod surface;

pub use adapter::{ContainerAdapter, HostAdapter, LeafAdapter};
pub use canvas::{Canvas, HorizontalAlignment};
pub use chrome::{ChromeController, Gesture};
pub use config::{StartPosition, SurfaceConfig};
pub use error::{Result, SurfaceError};
pub use geometry::{Zone, DEFAULT_HEADER, EDGE_BAND};
pub use skin::Skin;
pub use state::MouseState;
pub use surface::{Lifecycle, Surface};
