//! Custom chrome hit testing
//!
//! Decides when pointer input on a borderless container should become a
//! native window move or resize. The controller only makes decisions; the
//! surface carries them out against its host.

use crate::geometry::{classify_zone, correct_bounds, frame_rect, Zone, DEFAULT_HEADER};
use veneer_paint::{IntPoint, IntRect, IntSize};
use veneer_platform::{Cursor, ResizeEdge, WindowState};

/// Native gesture requested by a primary-button press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Move,
    Resize(ResizeEdge),
}

/// Hit-test state for one container surface
#[derive(Clone, Debug)]
pub struct ChromeController {
    active: bool,
    movable: bool,
    sizable: bool,
    smart_bounds: bool,
    header: i32,
    frame: IntRect,
    previous: Zone,
    pending: Option<Gesture>,
}

impl ChromeController {
    pub fn new(movable: bool, sizable: bool, smart_bounds: bool, header: i32) -> Self {
        Self {
            active: false,
            movable,
            sizable,
            smart_bounds,
            header,
            frame: IntRect::default(),
            previous: Zone::None,
            pending: None,
        }
    }

    /// Whether the surface currently owns its host's chrome
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self, size: IntSize) {
        self.active = true;
        self.resize(size);
    }

    /// Fall back to a plain widget
    pub fn deactivate(&mut self) {
        self.active = false;
        self.previous = Zone::None;
        self.pending = None;
    }

    pub fn movable(&self) -> bool {
        self.movable
    }

    pub fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
    }

    pub fn sizable(&self) -> bool {
        self.sizable
    }

    pub fn set_sizable(&mut self, sizable: bool) {
        self.sizable = sizable;
        if !sizable {
            self.previous = Zone::None;
        }
    }

    pub fn smart_bounds(&self) -> bool {
        self.smart_bounds
    }

    pub fn set_smart_bounds(&mut self, smart_bounds: bool) {
        self.smart_bounds = smart_bounds;
    }

    pub fn header(&self) -> i32 {
        self.header
    }

    pub fn set_header(&mut self, header: i32, size: IntSize) {
        self.header = header;
        self.resize(size);
    }

    /// Caption band that starts a window move
    pub fn frame(&self) -> IntRect {
        self.frame
    }

    /// Zone under the pointer at the last move
    pub fn zone(&self) -> Zone {
        self.previous
    }

    pub fn pending_gesture(&self) -> Option<Gesture> {
        self.pending
    }

    pub fn resize(&mut self, size: IntSize) {
        self.frame = frame_rect(size.width, self.header);
    }

    /// Re-classify on pointer motion
    ///
    /// Returns the cursor to show when the zone changed.
    pub fn track_pointer(
        &mut self,
        point: IntPoint,
        size: IntSize,
        window: WindowState,
    ) -> Option<Cursor> {
        if !self.active || !self.sizable || window == WindowState::Maximized {
            return None;
        }

        let zone = classify_zone(point, size);
        if zone == self.previous {
            return None;
        }
        tracing::trace!(?zone, "hit-test zone changed");
        self.previous = zone;
        Some(zone.cursor())
    }

    /// Pointer left the surface; returns a cursor reset when it moved onto a child
    pub fn pointer_left(&mut self, over_child: bool) -> Option<Cursor> {
        if !self.active || !self.sizable || !over_child {
            return None;
        }
        self.previous = Zone::None;
        Some(Cursor::Default)
    }

    /// Primary-button press at `point`
    pub fn pointer_down(&mut self, point: IntPoint, window: WindowState) -> Option<Gesture> {
        if !self.active || window == WindowState::Maximized {
            return None;
        }

        let gesture = if self.movable && self.frame.contains(point) {
            Gesture::Move
        } else if self.sizable {
            Gesture::Resize(self.previous.resize_edge()?)
        } else {
            return None;
        };

        tracing::debug!(?gesture, "native gesture requested");
        self.pending = Some(gesture);
        Some(gesture)
    }

    /// Forget a gesture the host refused to start
    pub fn cancel_gesture(&mut self) {
        self.pending = None;
    }

    /// The native loop handed the pointer back
    ///
    /// With smart bounds on, returns where the window must go to stay inside
    /// `area`. Returns `None` when no gesture was pending.
    pub fn gesture_completed(&mut self, window: IntRect, area: IntRect) -> Option<IntRect> {
        let gesture = self.pending.take()?;
        if !self.smart_bounds {
            return None;
        }
        let corrected = correct_bounds(window, area);
        if corrected != window {
            tracing::debug!(?gesture, ?window, ?corrected, "window pulled back into view");
        }
        Some(corrected)
    }
}

impl Default for ChromeController {
    fn default() -> Self {
        Self::new(true, true, true, DEFAULT_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: IntSize = IntSize::new(200, 100);

    fn active() -> ChromeController {
        let mut chrome = ChromeController::default();
        chrome.activate(SIZE);
        chrome
    }

    #[test]
    fn inactive_controller_never_starts_gestures() {
        let mut chrome = ChromeController::default();
        chrome.resize(SIZE);
        assert_eq!(
            chrome.track_pointer(IntPoint::new(1, 50), SIZE, WindowState::Normal),
            None
        );
        assert_eq!(chrome.pointer_down(IntPoint::new(50, 10), WindowState::Normal), None);
    }

    #[test]
    fn press_in_caption_moves() {
        let mut chrome = active();
        assert_eq!(
            chrome.pointer_down(IntPoint::new(50, 10), WindowState::Normal),
            Some(Gesture::Move)
        );
        assert_eq!(chrome.pending_gesture(), Some(Gesture::Move));
    }

    #[test]
    fn press_on_tracked_edge_resizes() {
        let mut chrome = active();
        assert_eq!(
            chrome.track_pointer(IntPoint::new(199, 99), SIZE, WindowState::Normal),
            Some(Cursor::ResizeNWSE)
        );
        // same zone again: no cursor churn
        assert_eq!(
            chrome.track_pointer(IntPoint::new(198, 98), SIZE, WindowState::Normal),
            None
        );
        assert_eq!(
            chrome.pointer_down(IntPoint::new(199, 99), WindowState::Normal),
            Some(Gesture::Resize(ResizeEdge::BottomRight))
        );
    }

    #[test]
    fn maximized_windows_ignore_chrome() {
        let mut chrome = active();
        assert_eq!(
            chrome.track_pointer(IntPoint::new(1, 50), SIZE, WindowState::Maximized),
            None
        );
        assert_eq!(
            chrome.pointer_down(IntPoint::new(50, 10), WindowState::Maximized),
            None
        );
    }

    #[test]
    fn interior_press_does_nothing() {
        let mut chrome = active();
        chrome.track_pointer(IntPoint::new(100, 50), SIZE, WindowState::Normal);
        assert_eq!(chrome.pointer_down(IntPoint::new(100, 50), WindowState::Normal), None);
        assert_eq!(chrome.pending_gesture(), None);
    }

    #[test]
    fn header_change_moves_the_caption_band() {
        let mut chrome = active();
        chrome.set_header(40, SIZE);
        assert_eq!(chrome.frame(), IntRect::new(7, 7, 186, 33));
    }

    #[test]
    fn leaving_onto_a_child_resets_the_cursor() {
        let mut chrome = active();
        chrome.track_pointer(IntPoint::new(1, 50), SIZE, WindowState::Normal);
        assert_eq!(chrome.pointer_left(false), None);
        assert_eq!(chrome.zone(), Zone::Left);
        assert_eq!(chrome.pointer_left(true), Some(Cursor::Default));
        assert_eq!(chrome.zone(), Zone::None);
    }

    #[test]
    fn completion_corrects_bounds_only_once() {
        let mut chrome = active();
        chrome.pointer_down(IntPoint::new(50, 10), WindowState::Normal);

        let area = IntRect::new(0, 0, 800, 600);
        let window = IntRect::new(700, -20, 300, 200);
        assert_eq!(
            chrome.gesture_completed(window, area),
            Some(IntRect::new(500, 0, 300, 200))
        );
        assert_eq!(chrome.gesture_completed(window, area), None);
    }

    #[test]
    fn completion_without_smart_bounds_keeps_position() {
        let mut chrome = active();
        chrome.set_smart_bounds(false);
        chrome.pointer_down(IntPoint::new(50, 10), WindowState::Normal);
        assert_eq!(
            chrome.gesture_completed(IntRect::new(-100, 0, 10, 10), IntRect::new(0, 0, 50, 50)),
            None
        );
        assert_eq!(chrome.pending_gesture(), None);
    }
}
