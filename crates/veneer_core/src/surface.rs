//! Drawable surface
//!
//! A [`Surface`] owns one skin, its named colors, its composition bitmap and
//! its chrome controller. All of it lives on the UI thread; the only thing the
//! animation timer thread touches is a pair of atomics in the surface's
//! animation signal, drained by [`Surface::pump_animation`].

use crate::adapter::{ContainerAdapter, HostAdapter, LeafAdapter};
use crate::canvas::{Canvas, HostMetrics, PaintProps};
use crate::chrome::{ChromeController, Gesture};
use crate::config::{StartPosition, SurfaceConfig};
use crate::error::{Result, SurfaceError};
use crate::geometry::centered_window;
use crate::skin::Skin;
use crate::state::MouseState;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use veneer_animation::{AnimationCallback, AnimationDispatcher};
use veneer_paint::{
    Bitmap, BitmapId, Color, EstimatedMetrics, Font, Image, IntPoint, IntRect, IntSize,
    PaintContext, TextMeasurer,
};
use veneer_platform::{BorderStyle, MouseButton, WindowHost};
use veneer_theme::{Bloom, ColorStore};

/// Ticks replayed by one pump; older ticks are dropped
const MAX_CATCH_UP_TICKS: u32 = 5;

/// Where a surface is in its life
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Unattached,
    /// Host attached, chrome wired, colors hooked
    Attached,
    /// Sized by its host at least once
    Sized,
    /// Painted at least once
    Painting,
    Destroyed,
}

type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct AnimationSignal {
    pending_ticks: AtomicU32,
    invalidate: AtomicBool,
    waker: Mutex<Option<Waker>>,
}

impl AnimationSignal {
    fn tick(&self, invalidate: bool) {
        self.pending_ticks.fetch_add(1, Ordering::AcqRel);
        if invalidate {
            self.invalidate.store(true, Ordering::Release);
        }
        let waker = self
            .waker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(wake) = waker {
            wake();
        }
    }

    fn set_waker(&self, waker: Option<Waker>) {
        *self.waker.lock().unwrap_or_else(PoisonError::into_inner) = waker;
    }
}

/// Paintable unit driven by a [`Skin`]
pub struct Surface<S: Skin> {
    skin: S,
    adapter: Box<dyn HostAdapter>,
    host: Option<Box<dyn WindowHost>>,
    dispatcher: Arc<AnimationDispatcher>,
    colors: ColorStore,
    chrome: ChromeController,
    lifecycle: Lifecycle,

    size: IntSize,
    transparent: bool,
    background: Color,
    deferred_transparent_background: bool,
    bitmap: Option<Bitmap>,

    text: String,
    font: Font,
    image: Option<Image>,
    no_rounding: bool,
    lock_width: i32,
    lock_height: i32,
    start_position: StartPosition,
    border_style: BorderStyle,

    state: MouseState,
    enabled: bool,
    has_shown: bool,
    creation_done: bool,
    redraw_pending: bool,

    animated: bool,
    animation: Arc<AnimationSignal>,
    callback: AnimationCallback,
}

impl<S: Skin> Surface<S> {
    /// Surface able to replace a top-level window's chrome
    pub fn container(
        skin: S,
        config: SurfaceConfig,
        dispatcher: Arc<AnimationDispatcher>,
    ) -> Result<Self> {
        let adapter = ContainerAdapter::new(config.control_mode);
        Self::with_adapter(skin, Box::new(adapter), config, dispatcher)
    }

    /// Surface embedded as an ordinary widget
    pub fn leaf(
        skin: S,
        config: SurfaceConfig,
        dispatcher: Arc<AnimationDispatcher>,
    ) -> Result<Self> {
        Self::with_adapter(skin, Box::new(LeafAdapter), config, dispatcher)
    }

    pub fn with_adapter(
        mut skin: S,
        adapter: Box<dyn HostAdapter>,
        config: SurfaceConfig,
        dispatcher: Arc<AnimationDispatcher>,
    ) -> Result<Self> {
        let mut colors = ColorStore::new();
        skin.register_colors(&mut colors);

        let animation = Arc::new(AnimationSignal::default());
        let signal = animation.clone();
        let callback: AnimationCallback = Arc::new(move |invalidate| signal.tick(invalidate));

        let mut surface = Self {
            skin,
            adapter,
            host: None,
            dispatcher,
            colors,
            chrome: ChromeController::new(
                config.movable,
                config.sizable,
                config.smart_bounds,
                config.header,
            ),
            lifecycle: Lifecycle::Unattached,
            size: IntSize::ZERO,
            transparent: config.transparent,
            background: SurfaceConfig::default().background,
            deferred_transparent_background: false,
            bitmap: None,
            text: String::new(),
            font: Font::default(),
            image: None,
            no_rounding: config.no_rounding,
            lock_width: config.lock_width.max(0),
            lock_height: config.lock_height.max(0),
            start_position: config.start_position,
            border_style: config.border_style,
            state: MouseState::None,
            enabled: true,
            has_shown: false,
            creation_done: false,
            redraw_pending: false,
            animated: config.animated,
            animation,
            callback,
        };
        surface.set_background(config.background)?;
        tracing::debug!(colors = surface.colors.len(), "surface created");
        Ok(surface)
    }

    // === Lifecycle ===

    /// Attach to (or move to) `host`
    ///
    /// Wires chrome when possible, runs the color hook, re-applies size locks
    /// and transparency, then sizes the surface to the host's client area.
    /// Creation hooks and animation registration run on the first attach.
    pub fn attach(&mut self, host: Box<dyn WindowHost>) -> Result<()> {
        if self.lifecycle == Lifecycle::Destroyed {
            return Err(SurfaceError::Configuration(
                "cannot attach a destroyed surface".into(),
            ));
        }

        let client = host.client_size();
        self.host = Some(host);
        self.wire_chrome();
        if self.lifecycle == Lifecycle::Unattached {
            self.lifecycle = Lifecycle::Attached;
        }
        tracing::debug!(chrome = self.chrome.is_active(), "surface attached");

        self.run_color_hook()?;
        self.set_transparent(self.transparent)?;
        if self.transparent && self.deferred_transparent_background {
            self.deferred_transparent_background = false;
            self.set_background(Color::TRANSPARENT)?;
        }

        self.resize(client);
        self.apply_locks();

        if !self.creation_done {
            self.skin.on_creation();
            self.creation_done = true;
            self.sync_animation()?;
        }
        Ok(())
    }

    fn wire_chrome(&mut self) {
        let Some(host) = self.host.as_deref() else {
            return;
        };

        match self.adapter.wire_chrome(host, self.border_style) {
            Ok(true) => {
                self.chrome.activate(host.client_size());
                if self.border_style != BorderStyle::None {
                    self.chrome.set_movable(false);
                    self.chrome.set_sizable(false);
                }
            }
            Ok(false) => self.chrome.deactivate(),
            Err(e) => {
                tracing::warn!("chrome wiring skipped, surface stays embedded: {e}");
                self.chrome.deactivate();
            }
        }

        if self.adapter.propagates_background() {
            host.set_background(self.background);
        }
    }

    /// Unregister from the dispatcher and release the bitmap and host
    ///
    /// Idempotent. The surface is destroyed even when unregistering fails.
    pub fn destroy(&mut self) -> Result<()> {
        if self.lifecycle == Lifecycle::Destroyed {
            return Ok(());
        }
        self.lifecycle = Lifecycle::Destroyed;
        self.animation.set_waker(None);

        let unregistered = self.dispatcher.unregister(&self.callback);
        self.bitmap = None;
        self.host = None;
        self.chrome.deactivate();
        tracing::debug!("surface destroyed");

        unregistered?;
        Ok(())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    pub fn host(&self) -> Option<&dyn WindowHost> {
        self.host.as_deref()
    }

    // === Size ===

    /// Host reports a new client size
    pub fn resize(&mut self, size: IntSize) {
        let size = self.clamp_size(size);
        if size == self.size && self.lifecycle != Lifecycle::Attached {
            return;
        }

        self.size = size;
        self.chrome.resize(size);
        self.reprovision_bitmap();
        if self.lifecycle == Lifecycle::Attached {
            self.lifecycle = Lifecycle::Sized;
        }
        self.invalidate();
    }

    /// Request new bounds; locked dimensions win
    ///
    /// Moves the host window when this surface owns its chrome. Returns the
    /// bounds actually applied.
    pub fn set_bounds(&mut self, bounds: IntRect) -> IntRect {
        let applied = IntRect::from_origin_size(bounds.origin(), self.clamp_size(bounds.size()));
        if self.chrome.is_active() {
            if let Some(host) = self.host.as_deref() {
                host.set_window_bounds(applied);
            }
        }
        self.resize(applied.size());
        applied
    }

    pub fn size(&self) -> IntSize {
        self.size
    }

    pub fn lock_width(&self) -> i32 {
        self.lock_width
    }

    /// Fix the width; 0 unlocks
    pub fn set_lock_width(&mut self, width: i32) {
        self.lock_width = width.max(0);
        self.apply_locks();
    }

    pub fn lock_height(&self) -> i32 {
        self.lock_height
    }

    /// Fix the height; 0 unlocks
    pub fn set_lock_height(&mut self, height: i32) {
        self.lock_height = height.max(0);
        self.apply_locks();
    }

    fn clamp_size(&self, size: IntSize) -> IntSize {
        IntSize::new(
            if self.lock_width != 0 { self.lock_width } else { size.width },
            if self.lock_height != 0 { self.lock_height } else { size.height },
        )
    }

    fn apply_locks(&mut self) {
        let Some(host) = self.host.as_deref() else {
            return;
        };
        if self.chrome.is_active() {
            let window = host.window_bounds();
            let locked = IntRect::from_origin_size(window.origin(), self.clamp_size(window.size()));
            if locked != window {
                host.set_window_bounds(locked);
            }
        }
        self.resize(self.size);
    }

    // === Transparency and background ===

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// Toggle transparent painting
    ///
    /// Turning transparency off while the background is translucent is
    /// refused and leaves the surface unchanged.
    pub fn set_transparent(&mut self, transparent: bool) -> Result<()> {
        if !transparent && !self.background.is_opaque() {
            return Err(SurfaceError::Configuration(format!(
                "cannot disable transparency while the background alpha is {}",
                self.background.alpha8()
            )));
        }
        self.transparent = transparent;
        self.reprovision_bitmap();
        self.invalidate();
        Ok(())
    }

    /// Whether paints go through the composition bitmap
    pub fn is_composited(&self) -> bool {
        self.transparent && self.adapter.owns_compositing()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Change the background color
    ///
    /// A translucent background requires transparency. The one exception is a
    /// fully transparent background set on a self-compositing surface before
    /// it is attached: it is remembered and applied on attach if transparency
    /// is enabled by then.
    pub fn set_background(&mut self, color: Color) -> Result<()> {
        if color == self.background {
            self.deferred_transparent_background = false;
            return Ok(());
        }

        if self.host.is_none()
            && !self.transparent
            && self.adapter.owns_compositing()
            && color == Color::TRANSPARENT
        {
            self.deferred_transparent_background = true;
            return Ok(());
        }

        if !self.transparent && !color.is_opaque() {
            return Err(SurfaceError::Configuration(format!(
                "background alpha {} requires transparency",
                color.alpha8()
            )));
        }

        self.background = color;
        self.deferred_transparent_background = false;
        if let Some(host) = self.host.as_deref() {
            if self.adapter.propagates_background() {
                host.set_background(color);
            }
            self.run_color_hook()?;
        }
        self.invalidate();
        Ok(())
    }

    fn reprovision_bitmap(&mut self) {
        if let Some(old) = self.bitmap.take() {
            tracing::debug!(id = old.id().0, "composition bitmap released");
        }
        if self.is_composited() && !self.size.is_empty() && self.lifecycle != Lifecycle::Destroyed
        {
            let bitmap = Bitmap::new(self.size);
            tracing::debug!(
                id = bitmap.id().0,
                width = self.size.width,
                height = self.size.height,
                "composition bitmap allocated"
            );
            self.bitmap = Some(bitmap);
        }
    }

    pub fn bitmap_id(&self) -> Option<BitmapId> {
        self.bitmap.as_ref().map(Bitmap::id)
    }

    pub fn bitmap_size(&self) -> Option<IntSize> {
        self.bitmap.as_ref().map(Bitmap::size)
    }

    // === Colors ===

    pub fn colors(&self) -> &ColorStore {
        &self.colors
    }

    /// Upsert one color and re-run the color hook
    pub fn set_color(&mut self, name: impl Into<String>, color: Color) -> Result<()> {
        self.colors.set_color(name, color);
        self.colors_changed()
    }

    pub fn blooms(&self) -> Vec<Bloom> {
        self.colors.blooms()
    }

    /// Copy back known entries and re-run the color hook
    pub fn set_blooms(&mut self, blooms: &[Bloom]) -> Result<()> {
        self.colors.apply_blooms(blooms);
        self.colors_changed()
    }

    pub fn customization(&self) -> String {
        self.colors.customization()
    }

    /// Restore colors from a customization string
    ///
    /// Malformed strings are ignored and return `Ok(false)`.
    pub fn set_customization(&mut self, encoded: &str) -> Result<bool> {
        if !self.colors.set_customization(encoded) {
            return Ok(false);
        }
        self.colors_changed()?;
        Ok(true)
    }

    fn colors_changed(&mut self) -> Result<()> {
        self.run_color_hook()?;
        self.invalidate();
        Ok(())
    }

    fn run_color_hook(&mut self) -> Result<()> {
        self.skin.color_hook(&self.colors)?;
        Ok(())
    }

    // === Plain properties ===

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidate();
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.invalidate();
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Size of the current image, zero when there is none
    pub fn image_size(&self) -> IntSize {
        self.image.as_ref().map_or(IntSize::ZERO, Image::size)
    }

    pub fn set_image(&mut self, image: Option<Image>) {
        self.image = image;
        self.invalidate();
    }

    pub fn no_rounding(&self) -> bool {
        self.no_rounding
    }

    pub fn set_no_rounding(&mut self, no_rounding: bool) {
        self.no_rounding = no_rounding;
        self.invalidate();
    }

    // === Chrome ===

    pub fn chrome(&self) -> &ChromeController {
        &self.chrome
    }

    pub fn set_movable(&mut self, movable: bool) {
        self.chrome.set_movable(movable);
    }

    pub fn set_sizable(&mut self, sizable: bool) {
        self.chrome.set_sizable(sizable);
    }

    pub fn set_smart_bounds(&mut self, smart_bounds: bool) {
        self.chrome.set_smart_bounds(smart_bounds);
    }

    pub fn header(&self) -> i32 {
        self.chrome.header()
    }

    /// Change the caption height and recompute the caption band
    pub fn set_header(&mut self, header: i32) {
        self.chrome.set_header(header, self.size);
        self.invalidate();
    }

    pub fn border_style(&self) -> BorderStyle {
        self.border_style
    }

    /// Native border of the host window; any native border disables custom
    /// move and resize
    pub fn set_border_style(&mut self, style: BorderStyle) {
        self.border_style = style;
        if !self.chrome.is_active() {
            return;
        }
        if let Some(host) = self.host.as_deref() {
            host.set_border_style(style);
        }
        if style != BorderStyle::None {
            self.chrome.set_movable(false);
            self.chrome.set_sizable(false);
        }
    }

    pub fn start_position(&self) -> StartPosition {
        self.start_position
    }

    pub fn set_start_position(&mut self, position: StartPosition) {
        self.start_position = position;
    }

    /// The host window was shown; applies the start position once
    pub fn shown(&mut self) {
        if self.has_shown || !self.chrome.is_active() {
            return;
        }
        if let Some(host) = self.host.as_deref() {
            if self.start_position.is_centered() {
                host.set_window_bounds(centered_window(
                    host.window_bounds(),
                    host.primary_screen(),
                ));
            }
        }
        self.has_shown = true;
    }

    // === Input ===

    pub fn mouse_state(&self) -> MouseState {
        self.state
    }

    fn set_state(&mut self, state: MouseState) {
        self.state = state;
        self.invalidate();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.set_state(if enabled {
            MouseState::None
        } else {
            MouseState::Block
        });
    }

    pub fn mouse_enter(&mut self) {
        self.set_state(MouseState::Over);
    }

    pub fn mouse_leave(&mut self) {
        self.set_state(MouseState::None);
        if let Some(host) = self.host.as_deref() {
            let over_child = host.has_child_at(host.pointer_position());
            if let Some(cursor) = self.chrome.pointer_left(over_child) {
                host.set_cursor(cursor);
            }
        }
    }

    pub fn mouse_move(&mut self, point: IntPoint) {
        if let Some(host) = self.host.as_deref() {
            if let Some(cursor) = self.chrome.track_pointer(point, self.size, host.window_state())
            {
                host.set_cursor(cursor);
            }
        }
    }

    /// Button press; a primary press on the caption or a resize band hands
    /// the pointer to the host's native move or resize loop
    pub fn mouse_down(&mut self, button: MouseButton, point: IntPoint) {
        if !button.is_primary() {
            return;
        }
        self.set_state(MouseState::Down);

        let Some(host) = self.host.as_deref() else {
            return;
        };
        let Some(gesture) = self.chrome.pointer_down(point, host.window_state()) else {
            return;
        };
        let started = match gesture {
            Gesture::Move => self.adapter.begin_native_move(host),
            Gesture::Resize(edge) => self.adapter.begin_native_resize(host, edge),
        };
        if let Err(e) = started {
            tracing::warn!(?gesture, "native gesture refused: {e}");
            self.chrome.cancel_gesture();
        }
    }

    pub fn mouse_up(&mut self, _button: MouseButton, _point: IntPoint) {
        if !self.gesture_completed() {
            self.set_state(MouseState::Over);
        }
    }

    /// The host's native move or resize loop ended
    ///
    /// With smart bounds on, pulls the window back inside the working area
    /// (or the parent container for child windows). Returns `false` when no
    /// gesture was pending.
    pub fn gesture_completed(&mut self) -> bool {
        let Some(host) = self.host.as_deref() else {
            return false;
        };
        if self.chrome.pending_gesture().is_none() {
            return false;
        }

        let area = if host.is_mdi_child() {
            host.parent_area().unwrap_or_else(|| host.working_area())
        } else {
            host.working_area()
        };
        let window = host.window_bounds();
        if let Some(corrected) = self.chrome.gesture_completed(window, area) {
            if corrected != window {
                host.set_window_bounds(corrected);
            }
        }

        self.set_state(MouseState::Over);
        true
    }

    // === Animation ===

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Join or leave the shared animation dispatcher
    ///
    /// Takes effect once the surface has been created on a host.
    pub fn set_animated(&mut self, animated: bool) -> Result<()> {
        self.animated = animated;
        self.sync_animation()
    }

    fn sync_animation(&mut self) -> Result<()> {
        if !self.creation_done || self.lifecycle == Lifecycle::Destroyed {
            return Ok(());
        }
        if self.animated {
            self.dispatcher.register(self.callback.clone())?;
        } else {
            self.dispatcher.unregister(&self.callback)?;
        }
        Ok(())
    }

    /// Called from the timer thread after every tick this surface receives
    pub fn set_animation_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.animation.set_waker(Some(Arc::new(waker)));
    }

    /// Replay dispatcher ticks on the UI thread
    ///
    /// Runs the animation hook once per tick received since the last pump
    /// and requests a redraw if any of them was a redraw tick. Returns whether
    /// a redraw was requested.
    pub fn pump_animation(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Destroyed {
            return false;
        }
        let ticks = self.animation.pending_ticks.swap(0, Ordering::AcqRel);
        for _ in 0..ticks.min(MAX_CATCH_UP_TICKS) {
            self.skin.on_animation();
        }
        let redraw = self.animation.invalidate.swap(false, Ordering::AcqRel);
        if redraw {
            self.invalidate();
        }
        redraw
    }

    // === Painting ===

    /// Whether a redraw was requested since the last paint
    pub fn needs_redraw(&self) -> bool {
        self.redraw_pending
    }

    fn invalidate(&mut self) {
        self.redraw_pending = true;
        if let Some(host) = self.host.as_deref() {
            host.request_redraw();
        }
    }

    /// Paint onto `target`
    ///
    /// Opaque surfaces draw straight onto `target`. Transparent
    /// self-compositing surfaces draw into their bitmap, which is then
    /// composited onto `target` in one command.
    pub fn paint(&mut self, target: &mut PaintContext) {
        if self.size.is_empty() || self.lifecycle == Lifecycle::Destroyed {
            return;
        }

        let composited = self.is_composited();
        let fallback = EstimatedMetrics::default();
        let host_metrics = self.host.as_deref().map(|host| HostMetrics(host));
        let measurer: &dyn TextMeasurer = match &host_metrics {
            Some(metrics) => metrics,
            None => &fallback,
        };
        let props = PaintProps {
            size: self.size,
            header: self.chrome.header(),
            composited,
            no_rounding: self.no_rounding,
            state: self.state,
            text: &self.text,
            font: &self.font,
            image: self.image.as_ref(),
            measurer,
        };

        match self.bitmap.as_mut().filter(|_| composited) {
            Some(bitmap) => {
                bitmap.clear();
                {
                    let mut canvas = Canvas::new(bitmap.context(), props);
                    self.skin.paint_hook(&mut canvas);
                }
                target.draw_bitmap(bitmap, 0.0, 0.0);
            }
            None => {
                let mut canvas = Canvas::new(target, props);
                self.skin.paint_hook(&mut canvas);
            }
        }

        self.redraw_pending = false;
        if matches!(self.lifecycle, Lifecycle::Attached | Lifecycle::Sized) {
            self.lifecycle = Lifecycle::Painting;
        }
    }

    // === Skin access ===

    pub fn skin(&self) -> &S {
        &self.skin
    }

    pub fn skin_mut(&mut self) -> &mut S {
        &mut self.skin
    }
}

impl<S: Skin> Drop for Surface<S> {
    fn drop(&mut self) {
        if let Err(e) = self.destroy() {
            tracing::warn!("surface teardown: {e}");
        }
    }
}

impl<S: Skin> std::fmt::Debug for Surface<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("lifecycle", &self.lifecycle)
            .field("size", &self.size)
            .field("transparent", &self.transparent)
            .field("composited", &self.is_composited())
            .field("chrome", &self.chrome.is_active())
            .field("animated", &self.animated)
            .finish()
    }
}
