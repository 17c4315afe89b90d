//! Hit-test zones and window bounds arithmetic

use veneer_paint::{IntPoint, IntRect, IntSize};
use veneer_platform::{Cursor, ResizeEdge};

/// Width of the resize band along every edge, in pixels
pub const EDGE_BAND: i32 = 7;

/// Default caption height
pub const DEFAULT_HEADER: i32 = 24;

/// Hit-test region of a surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Zone {
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Zone {
    /// Edge a native resize should grab, `None` for the interior
    pub fn resize_edge(self) -> Option<ResizeEdge> {
        match self {
            Zone::None => None,
            Zone::Left => Some(ResizeEdge::Left),
            Zone::Right => Some(ResizeEdge::Right),
            Zone::Top => Some(ResizeEdge::Top),
            Zone::Bottom => Some(ResizeEdge::Bottom),
            Zone::TopLeft => Some(ResizeEdge::TopLeft),
            Zone::TopRight => Some(ResizeEdge::TopRight),
            Zone::BottomLeft => Some(ResizeEdge::BottomLeft),
            Zone::BottomRight => Some(ResizeEdge::BottomRight),
        }
    }

    pub fn cursor(self) -> Cursor {
        match self {
            Zone::None => Cursor::Default,
            Zone::Left | Zone::Right => Cursor::ResizeEW,
            Zone::Top | Zone::Bottom => Cursor::ResizeNS,
            Zone::TopLeft | Zone::BottomRight => Cursor::ResizeNWSE,
            Zone::TopRight | Zone::BottomLeft => Cursor::ResizeNESW,
        }
    }

    pub fn is_resize(self) -> bool {
        self != Zone::None
    }
}

/// Classify `point` (client coordinates) against the edge bands of `size`
///
/// Corners need both an X band and a Y band and win over single edges.
pub fn classify_zone(point: IntPoint, size: IntSize) -> Zone {
    let left = point.x < EDGE_BAND;
    let right = point.x > size.width - EDGE_BAND;
    let top = point.y < EDGE_BAND;
    let bottom = point.y > size.height - EDGE_BAND;

    match (left, right, top, bottom) {
        (true, _, true, _) => Zone::TopLeft,
        (true, _, _, true) => Zone::BottomLeft,
        (_, true, true, _) => Zone::TopRight,
        (_, true, _, true) => Zone::BottomRight,
        (true, ..) => Zone::Left,
        (_, true, ..) => Zone::Right,
        (_, _, true, _) => Zone::Top,
        (.., true) => Zone::Bottom,
        _ => Zone::None,
    }
}

/// Draggable caption band: inset from the left, right and top edges
pub fn frame_rect(width: i32, header: i32) -> IntRect {
    IntRect::new(
        EDGE_BAND,
        EDGE_BAND,
        width - EDGE_BAND * 2,
        header - EDGE_BAND,
    )
}

/// Shrink `window` to fit `area`, then move it fully inside
pub fn correct_bounds(window: IntRect, area: IntRect) -> IntRect {
    let width = window.width.min(area.width);
    let height = window.height.min(area.height);

    let mut x = window.x.max(area.x);
    let mut y = window.y.max(area.y);
    if x + width > area.right() {
        x = area.right() - width;
    }
    if y + height > area.bottom() {
        y = area.bottom() - height;
    }

    IntRect::new(x, y, width, height)
}

/// `window` moved to the middle of `screen`, size unchanged
pub fn centered_window(window: IntRect, screen: IntRect) -> IntRect {
    let origin = center_in_rect(screen, window.size());
    IntRect::from_origin_size(origin, window.size())
}

/// Shrink a rectangle by `amount` on every side
pub fn offset_rect(rect: IntRect, amount: i32) -> IntRect {
    IntRect::new(
        rect.x + amount,
        rect.y + amount,
        rect.width - amount * 2,
        rect.height - amount * 2,
    )
}

/// Grow a size by `amount` in both dimensions
pub fn offset_size(size: IntSize, amount: i32) -> IntSize {
    IntSize::new(size.width + amount, size.height + amount)
}

pub fn offset_point(point: IntPoint, amount: i32) -> IntPoint {
    IntPoint::new(point.x + amount, point.y + amount)
}

/// Origin that centers `child` inside `parent` (parent-relative)
pub fn center(parent: IntSize, child: IntSize) -> IntPoint {
    IntPoint::new(
        parent.width / 2 - child.width / 2,
        parent.height / 2 - child.height / 2,
    )
}

/// Origin that centers `child` inside `parent` (absolute)
pub fn center_in_rect(parent: IntRect, child: IntSize) -> IntPoint {
    let local = center(parent.size(), child);
    IntPoint::new(local.x + parent.x, local.y + parent.y)
}

/// Like [`center_in_rect`], additionally shifted by `child`'s own origin
pub fn center_rect_in_rect(parent: IntRect, child: IntRect) -> IntPoint {
    let p = center_in_rect(parent, child.size());
    IntPoint::new(p.x + child.x, p.y + child.y)
}
