//! Core rendering engine.
//!
//! The [`Engine`] owns the scene as loaded plus the current [`View`], and
//! renders frames on demand. Every frame is derived from the base scene and
//! the view transform, so repeated key presses never compound floating point
//! error onto already-transformed geometry.

use crate::config::RenderConfig;
use crate::pipeline;
use crate::render::FrameBuffer;
use crate::scene::Scene;
use crate::view::View;

/// Input the host can forward to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Rotate about X by `+rotation_step` (key: W / Up)
    TiltUp,
    /// Rotate about X by `-rotation_step` (key: S / Down)
    TiltDown,
    /// Rotate about Y by `-rotation_step` (key: A / Left)
    TurnLeft,
    /// Rotate about Y by `+rotation_step` (key: D / Right)
    TurnRight,
    /// Multiply scale by `zoom_factor` (key: =)
    ZoomIn,
    /// Divide scale by `zoom_factor` (key: -)
    ZoomOut,
    /// Back to the loaded orientation (key: R)
    Reset,
}

pub struct Engine {
    base: Scene,
    view: View,
    config: RenderConfig,
}

impl Engine {
    pub fn new(scene: Scene, config: RenderConfig) -> Self {
        log::info!(
            "engine ready: {} polygons, {}x{} canvas",
            scene.len(),
            config.width,
            config.height
        );
        Self {
            base: scene,
            view: View::default(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn base_scene(&self) -> &Scene {
        &self.base
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Replace the scene and reset the view.
    pub fn set_scene(&mut self, scene: Scene) {
        log::info!("scene replaced: {} polygons", scene.len());
        self.base = scene;
        self.view.reset();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("canvas resized to {}x{}", width, height);
        self.config.width = width;
        self.config.height = height;
    }

    /// Centers the scene on the canvas, filling `coverage` of it.
    ///
    /// Does nothing for an empty scene.
    pub fn fit_to_canvas(&mut self, coverage: f32) {
        if let Some((min, max)) = self.base.bounds() {
            self.view
                .fit(min, max, self.config.width, self.config.height, coverage);
            log::debug!(
                "fitted view: scale {}, pivot {:?}",
                self.view.scale(),
                self.view.pivot()
            );
        }
    }

    pub fn apply(&mut self, command: ViewCommand) {
        let step = self.config.rotation_step;
        let zoom = self.config.zoom_factor;
        match command {
            ViewCommand::TiltUp => self.view.rotate_x(step),
            ViewCommand::TiltDown => self.view.rotate_x(-step),
            ViewCommand::TurnLeft => self.view.rotate_y(-step),
            ViewCommand::TurnRight => self.view.rotate_y(step),
            ViewCommand::ZoomIn => self.view.zoom(zoom),
            ViewCommand::ZoomOut => self.view.zoom(1.0 / zoom),
            ViewCommand::Reset => self.view.reset(),
        };
        log::debug!("view command {:?}, scale now {}", command, self.view.scale());
    }

    /// The base scene under the current view transform.
    pub fn current_scene(&self) -> Scene {
        pipeline::transform(&self.base, &self.view.to_transform())
    }

    /// Render the current frame
    pub fn render(&self) -> FrameBuffer {
        let scene = self.current_scene();
        pipeline::render_frame(
            &scene,
            self.config.width,
            self.config.height,
            &self.config.lighting(),
            self.config.background,
        )
    }
}
