//! Glass Window Demo
//!
//! A borderless window with a custom caption, edge resizing and a pulsing
//! accent driven by the shared animation timer. Paint commands are logged
//! instead of rasterized.
//!
//! Run with: cargo run -p veneer_platform_desktop --example glass_window

use std::sync::Arc;
use veneer_animation::AnimationDispatcher;
use veneer_core::{Canvas, HorizontalAlignment, MouseState, Skin, StartPosition, Surface, SurfaceConfig};
use veneer_paint::{Color, IntRect, Pen};
use veneer_platform::WindowConfig;
use veneer_platform_desktop::{init_logging, DesktopEventLoop};
use veneer_theme::ColorStore;

#[derive(Default)]
struct GlassSkin {
    back: Color,
    caption: Color,
    border: Color,
    accent: Color,
    pulse: u32,
}

impl Skin for GlassSkin {
    fn register_colors(&mut self, colors: &mut ColorStore) {
        colors.set_color_rgb("Back", 32, 34, 40);
        colors.set_color_rgb("Caption", 48, 52, 62);
        colors.set_color_rgb("Border", 20, 20, 24);
        colors.set_color_rgb("Accent", 90, 160, 255);
    }

    fn color_hook(&mut self, colors: &ColorStore) -> veneer_theme::Result<()> {
        self.back = colors.get_color("Back")?;
        self.caption = colors.get_color("Caption")?;
        self.border = colors.get_color("Border")?;
        self.accent = colors.get_color("Accent")?;
        Ok(())
    }

    fn paint_hook(&mut self, canvas: &mut Canvas<'_>) {
        let width = canvas.width();
        let header = canvas.header();
        canvas.clear(self.back);
        canvas.draw_gradient(self.caption, self.back, IntRect::new(0, 0, width, header));

        let glow = (self.pulse % 20) as f32 / 20.0;
        let accent = Color::lerp(&self.accent, &Color::WHITE, glow * 0.3);
        let accent = match canvas.mouse_state() {
            MouseState::Down => accent.with_alpha(0.7),
            _ => accent,
        };
        canvas.draw_caption(accent, HorizontalAlignment::Center, 0, 0);

        let bounds = canvas.bounds();
        canvas.draw_borders(Pen::new(self.border), bounds);
        canvas.draw_corners(Color::TRANSPARENT, bounds);
    }

    fn on_creation(&mut self) {
        tracing::info!("glass window created");
    }

    fn on_animation(&mut self) {
        self.pulse = self.pulse.wrapping_add(1);
    }
}

fn main() -> anyhow::Result<()> {
    init_logging("info");

    let config = SurfaceConfig {
        animated: true,
        header: 30,
        start_position: StartPosition::CenterScreen,
        ..Default::default()
    };
    let dispatcher = Arc::new(AnimationDispatcher::new());
    let mut surface = Surface::container(GlassSkin::default(), config, dispatcher)?;
    surface.set_text("Glass Window");

    let window = WindowConfig {
        title: "Glass Window".to_string(),
        width: 640,
        height: 420,
        decorations: false,
        ..Default::default()
    };

    DesktopEventLoop::new(window)?.run(surface, |host, commands| {
        tracing::debug!(
            background = %format!("#{:08X}", host.background().to_argb()),
            commands = commands.len(),
            "frame"
        );
    })?;
    Ok(())
}
