//! A flat-shaded software triangle rasterizer.
//!
//! Scenes are lists of colored triangles lit by one directional light. Each
//! frame is rotated, culled, shaded and scan-converted into a z-buffered
//! framebuffer entirely on the CPU. SDL2 is only used by the viewer to show
//! finished frames.
//!
//! # Quick Start
//!
//! ```ignore
//! use flatshade::prelude::*;
//!
//! let scene = load_scene("scene.txt")?;
//! let mut engine = Engine::new(scene, RenderConfig::default());
//! engine.apply(ViewCommand::TurnLeft);
//! save_png(&engine.render(), "frame.png")?;
//! ```

pub mod colors;
pub mod config;
pub mod engine;
pub mod export;
pub mod light;
pub mod loader;
pub mod logging;
pub mod math;
pub mod pipeline;
pub mod render;
pub mod scene;
pub mod transform;
pub mod view;
pub mod window;

pub use colors::Color;
pub use config::RenderConfig;
pub use engine::{Engine, ViewCommand};
pub use light::Lighting;
pub use loader::LoadError;
pub use render::{EdgeList, FrameBuffer};
pub use scene::{Polygon, Scene};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use flatshade::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::colors::Color;
    pub use crate::scene::{Polygon, Scene};

    // Engine
    pub use crate::config::RenderConfig;
    pub use crate::engine::{Engine, ViewCommand};
    pub use crate::view::View;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;
    pub use crate::transform::Transform;

    // I/O
    pub use crate::export::save_png;
    pub use crate::loader::{load_obj, load_scene, LoadError};

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
