//! Desktop event loop driving one surface

use crate::host::DesktopHost;
use std::sync::{Arc, Mutex, PoisonError};
use veneer_core::{Skin, Surface};
use veneer_paint::{IntPoint, IntSize, PaintCommand, PaintContext};
use veneer_platform::{MouseButton, PlatformError, WindowConfig, WindowHost};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop as WinitEventLoop, EventLoopProxy};
use winit::window::{WindowAttributes, WindowId};

/// Proxy for waking up the event loop from another thread
///
/// The animation timer uses it so pending ticks get pumped on the UI thread.
#[derive(Clone)]
pub struct WakeProxy {
    proxy: EventLoopProxy<()>,
}

impl WakeProxy {
    pub fn wake(&self) {
        // Ignore errors (e.g., if event loop has exited)
        let _ = self.proxy.send_event(());
    }
}

/// Desktop event loop wrapping winit's event loop
pub struct DesktopEventLoop {
    event_loop: WinitEventLoop<()>,
    window_config: WindowConfig,
    wake_proxy: WakeProxy,
}

impl DesktopEventLoop {
    pub fn new(config: WindowConfig) -> Result<Self, PlatformError> {
        let event_loop = {
            let mut builder = WinitEventLoop::builder();

            #[cfg(target_os = "macos")]
            {
                use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};
                builder.with_activation_policy(ActivationPolicy::Regular);
            }

            builder
                .build()
                .map_err(|e| PlatformError::EventLoop(e.to_string()))?
        };

        let wake_proxy = WakeProxy {
            proxy: event_loop.create_proxy(),
        };

        Ok(Self {
            event_loop,
            window_config: config,
            wake_proxy,
        })
    }

    pub fn wake_proxy(&self) -> WakeProxy {
        self.wake_proxy.clone()
    }

    /// Open the window, attach `surface` to it and run until it closes
    ///
    /// Every paint is handed to `frame` as recorded commands together with the
    /// host, whose [`DesktopHost::background`] is the color to clear behind
    /// them.
    pub fn run<S, F>(self, mut surface: Surface<S>, frame: F) -> Result<(), PlatformError>
    where
        S: Skin + 'static,
        F: FnMut(&DesktopHost, Vec<PaintCommand>) + 'static,
    {
        let waker = Mutex::new(self.wake_proxy.clone());
        surface.set_animation_waker(move || {
            waker.lock().unwrap_or_else(PoisonError::into_inner).wake();
        });

        let mut app = DesktopApp::new(self.window_config, surface, frame);
        self.event_loop
            .run_app(&mut app)
            .map_err(|e| PlatformError::EventLoop(e.to_string()))
    }
}

/// Internal winit application handler
struct DesktopApp<S: Skin, F> {
    window_config: WindowConfig,
    surface: Surface<S>,
    host: Option<DesktopHost>,
    frame: F,
}

impl<S, F> DesktopApp<S, F>
where
    S: Skin,
    F: FnMut(&DesktopHost, Vec<PaintCommand>),
{
    fn new(window_config: WindowConfig, surface: Surface<S>, frame: F) -> Self {
        Self {
            window_config,
            surface,
            host: None,
            frame,
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let attrs = WindowAttributes::default()
            .with_title(&self.window_config.title)
            .with_inner_size(LogicalSize::new(
                self.window_config.width,
                self.window_config.height,
            ))
            .with_resizable(self.window_config.resizable)
            .with_decorations(self.window_config.decorations)
            .with_transparent(self.window_config.transparent);

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;
        let host = DesktopHost::new(Arc::new(window));

        self.surface
            .attach(Box::new(host.clone()))
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;
        self.surface.shown();
        self.host = Some(host);
        Ok(())
    }

    fn redraw(&mut self) {
        let Some(host) = self.host.as_ref() else {
            return;
        };
        let mut ctx = PaintContext::new();
        self.surface.paint(&mut ctx);
        (self.frame)(host, ctx.take_commands());
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.surface.destroy() {
            tracing::warn!("surface teardown: {e}");
        }
        self.host = None;
        event_loop.exit();
    }
}

impl<S, F> ApplicationHandler for DesktopApp<S, F>
where
    S: Skin,
    F: FnMut(&DesktopHost, Vec<PaintCommand>),
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_some() {
            return;
        }
        if let Err(e) = self.open(event_loop) {
            tracing::error!("Failed to create window: {}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.close(event_loop),

            WindowEvent::Resized(size) => {
                self.surface.resize(IntSize::new(
                    i32::try_from(size.width).unwrap_or(i32::MAX),
                    i32::try_from(size.height).unwrap_or(i32::MAX),
                ));
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::CursorMoved { position, .. } => {
                let point = IntPoint::new(position.x as i32, position.y as i32);
                if let Some(host) = &self.host {
                    host.set_pointer(point);
                }
                self.surface.mouse_move(point);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let point = self
                    .host
                    .as_ref()
                    .map(|host| host.pointer_position())
                    .unwrap_or(IntPoint::ZERO);
                let button = convert_button(button);
                match state {
                    ElementState::Pressed => self.surface.mouse_down(button, point),
                    ElementState::Released => self.surface.mouse_up(button, point),
                }
            }

            WindowEvent::CursorEntered { .. } => {
                // A native drag swallows the release; re-entry is the first sign it ended
                self.surface.gesture_completed();
                self.surface.mouse_enter();
            }

            WindowEvent::CursorLeft { .. } => self.surface.mouse_leave(),

            _ => {}
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, _event: ()) {
        // Wake event from the animation timer
        self.surface.pump_animation();
    }
}

fn convert_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_convert_one_to_one() {
        assert_eq!(convert_button(WinitMouseButton::Left), MouseButton::Left);
        assert!(convert_button(WinitMouseButton::Left).is_primary());
        assert_eq!(convert_button(WinitMouseButton::Other(7)), MouseButton::Other(7));
        assert!(!convert_button(WinitMouseButton::Back).is_primary());
    }
}
