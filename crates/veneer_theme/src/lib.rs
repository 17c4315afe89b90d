//! Veneer Theme
//!
//! Named colors for custom-drawn surfaces. A skin registers every name it
//! paints with, then reads pens and brushes back by name. The whole table can
//! be saved and restored as one base64 customization string.

pub mod bloom;
pub mod customization;
pub mod error;
pub mod store;

pub use bloom::Bloom;
pub use customization::{decode_customization, encode_customization};
pub use error::{CustomizationError, Result, ThemeError};
pub use store::ColorStore;
