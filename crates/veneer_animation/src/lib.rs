//! Veneer Animation
//!
//! One shared periodic timer drives every animated surface in the process.
//!
//! # Features
//!
//! - **PeriodicTimer**: create/delete lifecycle with a single enabled flag
//! - **PrecisionTimer**: worker-thread implementation with coalesced ticks
//! - **ManualTimer**: hand-fired implementation for headless hosts and tests
//! - **AnimationDispatcher**: callback registry multiplexed onto one timer
//! - **FrameCadence**: splits fine ticks from the slower redraw interval

pub mod cadence;
pub mod dispatcher;
pub mod error;
pub mod timer;

pub use cadence::{FrameCadence, FRAME_INTERVAL_MS, TICK_RATE_MS};
pub use dispatcher::{AnimationCallback, AnimationDispatcher, CallbackId};
pub use error::{Result, TimerError};
pub use timer::{ManualTimer, PeriodicTimer, PrecisionTimer, TimerCallback};
