//! Mouse cursor shapes

/// Cursor shape requested from the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    Text,
    Crosshair,
    Move,
    NotAllowed,
    ResizeNS,
    ResizeEW,
    ResizeNESW,
    ResizeNWSE,
    Wait,
    Progress,
    /// Hide the cursor
    None,
}
