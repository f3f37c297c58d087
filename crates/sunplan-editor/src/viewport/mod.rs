//! Viewport and coordinate transformation for the site-plan canvas.
//!
//! Handles conversion between screen pixels and world coordinates (image
//! pixels of the site plan). The image is fitted into the canvas once with
//! [`ImageFit::contain`]; the camera then zooms and pans on top of that fit.
//! Both spaces have y pointing down, so there is no axis flip.

mod animation;

pub use animation::{ease_out_cubic, ViewportAnimation};

use crate::geometry::Bounds;
use sunplan_core::constants::{KEYBOARD_ZOOM_STEP, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP};
use sunplan_core::Point;
use sunplan_settings::ViewportSettings;

/// Uniform scale and centring offset that fits the image inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageFit {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ImageFit {
    fn default() -> Self {
        Self::identity()
    }
}

impl ImageFit {
    pub const fn identity() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Largest uniform scale that shows the whole image, centred.
    ///
    /// A zero, negative, or non-finite dimension yields the identity fit.
    pub fn contain(image_w: f64, image_h: f64, viewport_w: f64, viewport_h: f64) -> Self {
        let dims = [image_w, image_h, viewport_w, viewport_h];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Self::identity();
        }
        let scale = (viewport_w / image_w).min(viewport_h / image_h);
        Self {
            scale,
            offset_x: (viewport_w - image_w * scale) / 2.0,
            offset_y: (viewport_h - image_h * scale) / 2.0,
        }
    }
}

/// Pan offset in screen pixels plus zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

/// Represents the viewport transformation state (image fit, zoom, and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    camera: Camera,
    fit: ImageFit,
    canvas_width: f64,
    canvas_height: f64,
    image_width: f64,
    image_height: f64,
    min_zoom: f64,
    max_zoom: f64,
    keyboard_zoom_step: f64,
    wheel_zoom_step: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Viewport {
    /// Creates a viewport with an identity fit and the default zoom limits.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            camera: Camera::default(),
            fit: ImageFit::identity(),
            canvas_width,
            canvas_height,
            image_width: 0.0,
            image_height: 0.0,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            keyboard_zoom_step: KEYBOARD_ZOOM_STEP,
            wheel_zoom_step: WHEEL_ZOOM_STEP,
        }
    }

    /// Applies zoom limits and steps from the user's settings.
    pub fn apply_settings(&mut self, settings: &ViewportSettings) {
        self.min_zoom = settings.min_zoom;
        self.max_zoom = settings.max_zoom;
        self.keyboard_zoom_step = settings.keyboard_zoom_step;
        self.wheel_zoom_step = settings.wheel_zoom_step;
        self.camera.zoom = self.clamp_zoom(self.camera.zoom);
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions and refits the image.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
        self.refit();
    }

    /// Sets the site-plan image dimensions and refits the image.
    pub fn set_image_size(&mut self, width: f64, height: f64) {
        self.image_width = width;
        self.image_height = height;
        self.refit();
    }

    fn refit(&mut self) {
        self.fit = ImageFit::contain(
            self.image_width,
            self.image_height,
            self.canvas_width,
            self.canvas_height,
        );
    }

    pub fn image_fit(&self) -> ImageFit {
        self.fit
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Replaces the camera, clamping its zoom.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Camera {
            zoom: self.clamp_zoom(camera.zoom),
            ..camera
        };
    }

    /// Gets the current zoom level (1.0 = image fitted to the canvas).
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    /// Screen pixels per world unit.
    pub fn world_scale(&self) -> f64 {
        self.camera.zoom * self.fit.scale
    }

    /// Converts a screen-pixel length into world units.
    pub fn screen_to_world_distance(&self, pixels: f64) -> f64 {
        pixels / self.world_scale()
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Converts screen coordinates to world coordinates.
    ///
    /// ```text
    /// world = (screen - fit_offset - camera) / (zoom * fit_scale)
    /// ```
    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64) -> Point {
        let scale = self.world_scale();
        Point::new(
            (screen_x - self.fit.offset_x - self.camera.x) / scale,
            (screen_y - self.fit.offset_y - self.camera.y) / scale,
        )
    }

    /// Converts world coordinates to screen coordinates.
    pub fn world_to_screen(&self, point: &Point) -> (f64, f64) {
        let scale = self.world_scale();
        (
            point.x * scale + self.camera.x + self.fit.offset_x,
            point.y * scale + self.camera.y + self.fit.offset_y,
        )
    }

    /// Changes zoom while keeping the world point under `anchor` fixed on screen.
    pub fn zoom_at_point(&mut self, new_zoom: f64, anchor: (f64, f64)) {
        if new_zoom == self.camera.zoom {
            return;
        }
        let new_zoom = self.clamp_zoom(new_zoom);
        if new_zoom == self.camera.zoom {
            return;
        }

        let world = self.screen_to_world(anchor.0, anchor.1);
        let new_scale = new_zoom * self.fit.scale;
        self.camera = Camera {
            x: anchor.0 - self.fit.offset_x - world.x * new_scale,
            y: anchor.1 - self.fit.offset_y - world.y * new_scale,
            zoom: new_zoom,
        };
    }

    /// Screen-space centre of the canvas.
    pub fn center(&self) -> (f64, f64) {
        (self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Keyboard zoom in about the canvas centre.
    pub fn zoom_in(&mut self) {
        self.zoom_at_point(self.camera.zoom * self.keyboard_zoom_step, self.center());
    }

    /// Keyboard zoom out about the canvas centre.
    pub fn zoom_out(&mut self) {
        self.zoom_at_point(self.camera.zoom / self.keyboard_zoom_step, self.center());
    }

    /// Returns to zoom 1.0 about the canvas centre.
    pub fn reset_zoom(&mut self) {
        self.zoom_at_point(1.0, self.center());
    }

    /// One wheel notch about the cursor; negative `delta_y` zooms in.
    pub fn wheel_zoom(&mut self, delta_y: f64, anchor: (f64, f64)) {
        if delta_y == 0.0 {
            return;
        }
        let factor = if delta_y < 0.0 {
            self.wheel_zoom_step
        } else {
            1.0 / self.wheel_zoom_step
        };
        self.zoom_at_point(self.camera.zoom * factor, anchor);
    }

    /// Pans by a raw screen delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.camera.x += dx;
        self.camera.y += dy;
    }

    /// Restores zoom 1.0 and zero pan.
    pub fn reset(&mut self) {
        self.camera = Camera::default();
    }

    /// Camera that puts `point` at the canvas centre at the current zoom.
    pub fn camera_centered_on(&self, point: &Point) -> Camera {
        let scale = self.world_scale();
        let (cx, cy) = self.center();
        Camera {
            x: cx - self.fit.offset_x - point.x * scale,
            y: cy - self.fit.offset_y - point.y * scale,
            zoom: self.camera.zoom,
        }
    }

    /// Centres the view on a world point without changing zoom.
    pub fn center_on(&mut self, point: &Point) {
        self.camera = self.camera_centered_on(point);
    }

    /// Frames a world rectangle, reserving `padding` of the canvas on each side.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, padding: f64) {
        let (width, height) = (bounds.width(), bounds.height());
        if width <= 0.0 || height <= 0.0 || self.fit.scale <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - padding * 2.0;
        let zoom_x = self.canvas_width * padding_factor / (width * self.fit.scale);
        let zoom_y = self.canvas_height * padding_factor / (height * self.fit.scale);
        self.camera.zoom = self.clamp_zoom(zoom_x.min(zoom_y));
        self.center_on(&bounds.center());
    }

    /// True when the rectangle lies entirely within the canvas.
    pub fn is_bounds_visible(&self, bounds: &Bounds) -> bool {
        let (x0, y0) = self.world_to_screen(&Point::new(bounds.min_x, bounds.min_y));
        let (x1, y1) = self.world_to_screen(&Point::new(bounds.max_x, bounds.max_y));
        let canvas = Bounds::new(0.0, 0.0, self.canvas_width, self.canvas_height);
        canvas.contains_bounds(&Bounds::from_corners(Point::new(x0, y0), Point::new(x1, y1)))
    }
}
