//! Viewport operations (zoom, pan, resize) for the editor.
//!
//! Every user-driven camera change cancels a running keep-visible animation.

use super::EditorState;
use crate::geometry::{bounds, bounds_of};
use crate::store::BuildingStore;
use crate::viewport::ViewportAnimation;
use sunplan_core::constants::VIEW_PADDING;
use tracing::debug;

impl<S: BuildingStore> EditorState<S> {
    /// Sets the site-plan image size used for the contain fit.
    pub fn set_image_size(&mut self, width: f64, height: f64) {
        self.viewport.set_image_size(width, height);
    }

    /// Handles a canvas resize at `now_ms`.
    ///
    /// Any running animation is superseded. If the primary selection ends up
    /// partly off screen, an animation towards a camera centred on it starts.
    pub fn resize(&mut self, width: f64, height: f64, now_ms: f64) {
        self.viewport.set_canvas_size(width, height);
        self.animation = None;

        let target = self
            .selection
            .primary()
            .and_then(|id| self.store.building(id))
            .and_then(|b| bounds(&b.footprint));
        let Some(target) = target else {
            return;
        };
        if self.viewport.is_bounds_visible(&target) {
            return;
        }

        let to = self.viewport.camera_centered_on(&target.center());
        debug!("Animating camera to keep the selection visible");
        self.animation = Some(ViewportAnimation::new(
            self.viewport.camera(),
            to,
            now_ms,
            self.animation_ms,
        ));
    }

    /// Advances the keep-visible animation. Returns `true` while it is still running.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(animation) = &self.animation else {
            return false;
        };
        let camera = animation.sample(now_ms);
        let finished = animation.is_finished(now_ms);
        self.viewport.set_camera(camera);
        if finished {
            self.animation = None;
        }
        !finished
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            debug!("Viewport animation cancelled by user input");
        }
    }

    pub fn zoom_in(&mut self) {
        self.cancel_animation();
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.cancel_animation();
        self.viewport.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.cancel_animation();
        self.viewport.reset_zoom();
    }

    pub fn zoom_at_point(&mut self, zoom: f64, anchor: (f64, f64)) {
        self.cancel_animation();
        self.viewport.zoom_at_point(zoom, anchor);
    }

    pub fn wheel_zoom(&mut self, delta_y: f64, anchor: (f64, f64)) {
        self.cancel_animation();
        self.viewport.wheel_zoom(delta_y, anchor);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.cancel_animation();
        self.viewport.pan_by(dx, dy);
    }

    /// Restores zoom 1.0 and zero pan.
    pub fn reset_view(&mut self) {
        self.cancel_animation();
        self.viewport.reset();
    }

    /// Frames every building with the default padding.
    pub fn fit_to_buildings(&mut self) {
        if let Some(all) = bounds_of(self.store.buildings()) {
            self.cancel_animation();
            self.viewport.fit_to_bounds(&all, VIEW_PADDING);
        }
    }
}
