//! Drawing helpers handed to skins during a paint

use crate::geometry::{center, offset_rect};
use crate::state::MouseState;
use veneer_paint::{
    Brush, Color, ColorBlend, Font, Gradient, Image, IntPoint, IntRect, IntSize, PaintContext,
    Path, Pen, Point, Rect, TextMeasurer,
};
use veneer_platform::WindowHost;

/// Horizontal placement for caption text and images
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Routes text measurement through the host's text stack
pub(crate) struct HostMetrics<'a>(pub &'a dyn WindowHost);

impl TextMeasurer for HostMetrics<'_> {
    fn measure(&self, text: &str, font: &Font, max_width: Option<i32>) -> IntSize {
        self.0.measure_text(text, font, max_width)
    }
}

/// Surface properties a paint can read
pub(crate) struct PaintProps<'a> {
    pub size: IntSize,
    pub header: i32,
    pub composited: bool,
    pub no_rounding: bool,
    pub state: MouseState,
    pub text: &'a str,
    pub font: &'a Font,
    pub image: Option<&'a Image>,
    pub measurer: &'a dyn TextMeasurer,
}

/// Paint target plus the surface state skins draw from
///
/// Everything drawn is clipped to the surface size.
pub struct Canvas<'a> {
    ctx: &'a mut PaintContext,
    props: PaintProps<'a>,
}

impl<'a> Canvas<'a> {
    pub(crate) fn new(ctx: &'a mut PaintContext, props: PaintProps<'a>) -> Self {
        let size = props.size;
        ctx.push_clip(0.0, 0.0, size.width as f32, size.height as f32);
        Self { ctx, props }
    }

    /// Raw command recorder
    pub fn context(&mut self) -> &mut PaintContext {
        self.ctx
    }

    pub fn size(&self) -> IntSize {
        self.props.size
    }

    pub fn width(&self) -> i32 {
        self.props.size.width
    }

    pub fn height(&self) -> i32 {
        self.props.size.height
    }

    /// Whole surface as a rectangle at the origin
    pub fn bounds(&self) -> IntRect {
        IntRect::from_origin_size(IntPoint::ZERO, self.props.size)
    }

    /// Caption height
    pub fn header(&self) -> i32 {
        self.props.header
    }

    /// Whether this paint goes into the surface's composition bitmap
    pub fn is_composited(&self) -> bool {
        self.props.composited
    }

    pub fn no_rounding(&self) -> bool {
        self.props.no_rounding
    }

    pub fn mouse_state(&self) -> MouseState {
        self.props.state
    }

    pub fn text(&self) -> &str {
        self.props.text
    }

    pub fn font(&self) -> &Font {
        self.props.font
    }

    pub fn image(&self) -> Option<&Image> {
        self.props.image
    }

    pub fn clear(&mut self, color: Color) {
        self.ctx.clear(color);
    }

    // === Measure ===

    /// Size of the surface text, wrapped at the surface width
    pub fn measure(&self) -> IntSize {
        self.measure_text(self.props.text)
    }

    pub fn measure_text(&self, text: &str) -> IntSize {
        self.props
            .measurer
            .measure(text, self.props.font, Some(self.props.size.width))
    }

    // === Pixels and corners ===

    pub fn draw_pixel(&mut self, color: Color, x: i32, y: i32) {
        if self.props.composited {
            self.ctx.set_pixel(x, y, color);
        } else {
            self.ctx
                .fill_rect(x as f32, y as f32, 1.0, 1.0, Brush::solid(color));
        }
    }

    /// Mark the four corner pixels of `rect`; skipped under no-rounding
    pub fn draw_corners(&mut self, color: Color, rect: IntRect) {
        if self.props.no_rounding {
            return;
        }
        let right = rect.x + rect.width - 1;
        let bottom = rect.y + rect.height - 1;
        self.draw_pixel(color, rect.x, rect.y);
        self.draw_pixel(color, right, rect.y);
        self.draw_pixel(color, rect.x, bottom);
        self.draw_pixel(color, right, bottom);
    }

    pub fn draw_corners_offset(&mut self, color: Color, rect: IntRect, offset: i32) {
        self.draw_corners(color, offset_rect(rect, offset));
    }

    // === Borders ===

    /// One-pixel outline just inside `rect`
    pub fn draw_borders(&mut self, pen: Pen, rect: IntRect) {
        self.ctx.stroke_rect(
            Rect::new(
                rect.x as f32,
                rect.y as f32,
                (rect.width - 1) as f32,
                (rect.height - 1) as f32,
            ),
            pen,
        );
    }

    pub fn draw_borders_offset(&mut self, pen: Pen, rect: IntRect, offset: i32) {
        self.draw_borders(pen, offset_rect(rect, offset));
    }

    // === Text ===

    /// Surface text, vertically centered in the caption band
    pub fn draw_caption(&mut self, brush: impl Into<Brush>, align: HorizontalAlignment, x: i32, y: i32) {
        let text = self.props.text;
        self.draw_text(brush, text, align, x, y);
    }

    /// `text` vertically centered in the caption band; empty text draws nothing
    pub fn draw_text(
        &mut self,
        brush: impl Into<Brush>,
        text: &str,
        align: HorizontalAlignment,
        x: i32,
        y: i32,
    ) {
        if text.is_empty() {
            return;
        }
        let measured = self.measure_text(text);
        let anchor = self.caption_anchor(measured);
        let left = match align {
            HorizontalAlignment::Left => x,
            HorizontalAlignment::Center => anchor.x + x,
            HorizontalAlignment::Right => self.props.size.width - measured.width - x,
        };
        let font = self.props.font;
        self.ctx
            .draw_text(text, left as f32, (anchor.y + y) as f32, font, brush);
    }

    /// Surface text at an absolute position
    pub fn draw_text_at(&mut self, brush: impl Into<Brush>, x: i32, y: i32) {
        let text = self.props.text;
        if text.is_empty() {
            return;
        }
        let font = self.props.font;
        self.ctx.draw_text(text, x as f32, y as f32, font, brush);
    }

    // === Images ===

    /// Surface image, vertically centered in the caption band
    pub fn draw_caption_image(&mut self, align: HorizontalAlignment, x: i32, y: i32) {
        if let Some(image) = self.props.image {
            self.draw_image(image, align, x, y);
        }
    }

    pub fn draw_image(&mut self, image: &Image, align: HorizontalAlignment, x: i32, y: i32) {
        let anchor = self.caption_anchor(image.size());
        let left = match align {
            HorizontalAlignment::Left => x,
            HorizontalAlignment::Center => anchor.x + x,
            HorizontalAlignment::Right => self.props.size.width - image.width - x,
        };
        self.draw_image_at(image, left, anchor.y + y);
    }

    pub fn draw_image_at(&mut self, image: &Image, x: i32, y: i32) {
        let rect = Rect::new(x as f32, y as f32, image.width as f32, image.height as f32);
        self.ctx.draw_image(image, rect);
    }

    // === Gradients ===

    /// Two-color gradient, top to bottom
    pub fn draw_gradient(&mut self, from: Color, to: Color, rect: IntRect) {
        self.draw_gradient_angle(from, to, rect, 90.0);
    }

    pub fn draw_gradient_angle(&mut self, from: Color, to: Color, rect: IntRect, angle: f32) {
        self.draw_blend_angle(&ColorBlend::new().stop(0.0, from).stop(1.0, to), rect, angle);
    }

    /// Multi-stop gradient, top to bottom
    pub fn draw_blend(&mut self, blend: &ColorBlend, rect: IntRect) {
        self.draw_blend_angle(blend, rect, 90.0);
    }

    pub fn draw_blend_angle(&mut self, blend: &ColorBlend, rect: IntRect, angle: f32) {
        let area = Rect::from(rect);
        let gradient = Gradient::linear_in_rect(area, angle, blend.stops().to_vec());
        self.ctx
            .fill_rect(area.x, area.y, area.width, area.height, gradient);
    }

    /// Radial blend centered in `rect`
    pub fn draw_radial(&mut self, blend: &ColorBlend, rect: IntRect) {
        self.draw_radial_center(blend, rect, IntPoint::new(rect.width / 2, rect.height / 2));
    }

    /// Radial blend inside the ellipse of `rect`
    ///
    /// Blend stops run from the ellipse edge (0.0) to `center` (1.0), which is
    /// relative to `rect`.
    pub fn draw_radial_center(&mut self, blend: &ColorBlend, rect: IntRect, center: IntPoint) {
        let ellipse = Rect::new(
            rect.x as f32,
            rect.y as f32,
            (rect.width - 1) as f32,
            (rect.height - 1) as f32,
        );
        let focus = Point::new((rect.x + center.x) as f32, (rect.y + center.y) as f32);
        let gradient = Gradient::radial_in_rect(ellipse, focus, blend.stops().to_vec());
        self.ctx.fill_ellipse(Rect::from(rect), gradient);
    }

    // === Paths ===

    /// Rounded rectangle outline with `slope`-sized corner arcs
    pub fn create_round(&self, rect: IntRect, slope: i32) -> Path {
        Path::rounded_rect(Rect::from(rect), slope as f32)
    }

    fn caption_anchor(&self, content: IntSize) -> IntPoint {
        center(
            IntSize::new(self.props.size.width, self.props.header),
            content,
        )
    }
}

impl Drop for Canvas<'_> {
    fn drop(&mut self) {
        self.ctx.pop_clip();
    }
}
