//! Pointer interaction state

/// What the pointer is doing to the surface, for skins to paint from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseState {
    #[default]
    None,
    Over,
    Down,
    /// Surface is disabled
    Block,
}
