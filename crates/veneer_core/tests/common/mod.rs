//! Recording host and skins shared by the surface tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use veneer_animation::{AnimationDispatcher, ManualTimer};
use veneer_core::{Canvas, HorizontalAlignment, Skin};
use veneer_paint::{Color, IntPoint, IntRect, IntSize, Pen};
use veneer_platform::{BorderStyle, Cursor, PlatformError, ResizeEdge, WindowHost, WindowState};
use veneer_theme::ColorStore;

/// What the host looks like and everything a surface did to it
#[derive(Debug)]
pub struct HostLog {
    pub has_handle: bool,
    pub top_level: bool,
    pub mdi_child: bool,
    pub refuse_gestures: bool,
    pub child_under_pointer: bool,
    pub client_size: IntSize,
    pub pointer: IntPoint,
    pub window_state: WindowState,
    pub window_bounds: IntRect,
    pub working_area: IntRect,
    pub parent_area: Option<IntRect>,
    pub primary_screen: IntRect,

    pub cursors: Vec<Cursor>,
    pub backgrounds: Vec<Color>,
    pub border_styles: Vec<BorderStyle>,
    pub bounds_set: Vec<IntRect>,
    pub moves: usize,
    pub resizes: Vec<ResizeEdge>,
    pub captures_released: usize,
    pub redraws: usize,
}

impl Default for HostLog {
    fn default() -> Self {
        Self {
            has_handle: true,
            top_level: true,
            mdi_child: false,
            refuse_gestures: false,
            child_under_pointer: false,
            client_size: IntSize::new(200, 100),
            pointer: IntPoint::ZERO,
            window_state: WindowState::Normal,
            window_bounds: IntRect::new(100, 100, 200, 100),
            working_area: IntRect::new(0, 0, 800, 600),
            parent_area: None,
            primary_screen: IntRect::new(0, 0, 1920, 1080),
            cursors: Vec::new(),
            backgrounds: Vec::new(),
            border_styles: Vec::new(),
            bounds_set: Vec::new(),
            moves: 0,
            resizes: Vec::new(),
            captures_released: 0,
            redraws: 0,
        }
    }
}

/// Host handle; clones share one log
#[derive(Clone, Default)]
pub struct FakeHost {
    log: Rc<RefCell<HostLog>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(configure: impl FnOnce(&mut HostLog)) -> Self {
        let host = Self::new();
        configure(&mut host.log.borrow_mut());
        host
    }

    pub fn log(&self) -> std::cell::Ref<'_, HostLog> {
        self.log.borrow()
    }

    pub fn log_mut(&self) -> std::cell::RefMut<'_, HostLog> {
        self.log.borrow_mut()
    }

    pub fn boxed(&self) -> Box<dyn WindowHost> {
        Box::new(self.clone())
    }
}

impl WindowHost for FakeHost {
    fn has_handle(&self) -> bool {
        self.log.borrow().has_handle
    }

    fn is_top_level(&self) -> bool {
        self.log.borrow().top_level
    }

    fn is_mdi_child(&self) -> bool {
        self.log.borrow().mdi_child
    }

    fn client_size(&self) -> IntSize {
        self.log.borrow().client_size
    }

    fn pointer_position(&self) -> IntPoint {
        self.log.borrow().pointer
    }

    fn has_child_at(&self, _point: IntPoint) -> bool {
        self.log.borrow().child_under_pointer
    }

    fn release_capture(&self) {
        self.log.borrow_mut().captures_released += 1;
    }

    fn begin_native_move(&self) -> veneer_platform::Result<()> {
        let mut log = self.log.borrow_mut();
        if log.refuse_gestures {
            return Err(PlatformError::WindowOperation("drag refused".into()));
        }
        log.moves += 1;
        Ok(())
    }

    fn begin_native_resize(&self, edge: ResizeEdge) -> veneer_platform::Result<()> {
        let mut log = self.log.borrow_mut();
        if log.refuse_gestures {
            return Err(PlatformError::WindowOperation("resize refused".into()));
        }
        log.resizes.push(edge);
        Ok(())
    }

    fn window_state(&self) -> WindowState {
        self.log.borrow().window_state
    }

    fn window_bounds(&self) -> IntRect {
        self.log.borrow().window_bounds
    }

    fn set_window_bounds(&self, bounds: IntRect) {
        let mut log = self.log.borrow_mut();
        log.window_bounds = bounds;
        log.bounds_set.push(bounds);
    }

    fn working_area(&self) -> IntRect {
        self.log.borrow().working_area
    }

    fn parent_area(&self) -> Option<IntRect> {
        self.log.borrow().parent_area
    }

    fn primary_screen(&self) -> IntRect {
        self.log.borrow().primary_screen
    }

    fn set_cursor(&self, cursor: Cursor) {
        self.log.borrow_mut().cursors.push(cursor);
    }

    fn request_redraw(&self) {
        self.log.borrow_mut().redraws += 1;
    }

    fn set_background(&self, color: Color) {
        self.log.borrow_mut().backgrounds.push(color);
    }

    fn set_border_style(&self, style: BorderStyle) {
        self.log.borrow_mut().border_styles.push(style);
    }
}

/// Two-color skin that counts its hook calls
#[derive(Debug, Default)]
pub struct CountingSkin {
    pub back: Color,
    pub border: Color,
    pub color_hooks: usize,
    pub creations: usize,
    pub animations: usize,
    pub paints: usize,
}

impl Skin for CountingSkin {
    fn register_colors(&mut self, colors: &mut ColorStore) {
        colors.set_color_rgb("Back", 40, 40, 40);
        colors.set_color_rgb("Border", 200, 0, 0);
    }

    fn color_hook(&mut self, colors: &ColorStore) -> veneer_theme::Result<()> {
        self.back = colors.get_color("Back")?;
        self.border = colors.get_color("Border")?;
        self.color_hooks += 1;
        Ok(())
    }

    fn paint_hook(&mut self, canvas: &mut Canvas<'_>) {
        self.paints += 1;
        canvas.clear(self.back);
        let bounds = canvas.bounds();
        canvas.draw_borders(Pen::new(self.border), bounds);
        canvas.draw_caption(self.border, HorizontalAlignment::Center, 0, 0);
    }

    fn on_creation(&mut self) {
        self.creations += 1;
    }

    fn on_animation(&mut self) {
        self.animations += 1;
    }
}

/// Skin with a single registered color
#[derive(Debug, Default)]
pub struct MonoSkin {
    pub fill: Color,
}

impl Skin for MonoSkin {
    fn register_colors(&mut self, colors: &mut ColorStore) {
        colors.set_color("Fill", Color::BLACK);
    }

    fn color_hook(&mut self, colors: &ColorStore) -> veneer_theme::Result<()> {
        self.fill = colors.get_color("Fill")?;
        Ok(())
    }

    fn paint_hook(&mut self, canvas: &mut Canvas<'_>) {
        canvas.clear(self.fill);
    }
}

/// Skin whose color hook asks for a name it never registered
#[derive(Debug, Default)]
pub struct ForgetfulSkin;

impl Skin for ForgetfulSkin {
    fn register_colors(&mut self, _colors: &mut ColorStore) {}

    fn color_hook(&mut self, colors: &ColorStore) -> veneer_theme::Result<()> {
        colors.get_color("Missing").map(|_| ())
    }

    fn paint_hook(&mut self, _canvas: &mut Canvas<'_>) {}
}

pub fn dispatcher() -> (Arc<AnimationDispatcher>, ManualTimer) {
    let timer = ManualTimer::new();
    (Arc::new(AnimationDispatcher::with_timer(timer.clone())), timer)
}
