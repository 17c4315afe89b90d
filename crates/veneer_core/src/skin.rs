//! Skin hooks

use crate::canvas::Canvas;
use veneer_theme::{ColorStore, Result};

/// Concrete look of a surface
///
/// A skin registers its colors once, caches whatever it derives from them in
/// [`Skin::color_hook`], and draws in [`Skin::paint_hook`].
pub trait Skin {
    /// Register every color name the skin paints with
    ///
    /// Runs once, when the surface is constructed, before anything else.
    fn register_colors(&mut self, colors: &mut ColorStore);

    /// Colors changed or the surface was (re)attached
    fn color_hook(&mut self, colors: &ColorStore) -> Result<()>;

    fn paint_hook(&mut self, canvas: &mut Canvas<'_>);

    /// Runs once, after the first attach and chrome wiring
    fn on_creation(&mut self) {}

    /// Runs on every dispatcher tick while the surface is animated
    fn on_animation(&mut self) {}
}
