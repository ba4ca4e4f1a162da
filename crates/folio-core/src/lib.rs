pub mod animation;
pub mod constants;
pub mod content;
pub mod context;
pub mod error;
pub mod interaction;
pub mod panel;
pub mod picking;
pub mod registry;
pub mod scene;
pub mod state;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animation::*;
pub use constants::*;
pub use content::*;
pub use context::*;
pub use error::*;
pub use interaction::*;
pub use panel::*;
pub use picking::*;
pub use registry::*;
pub use state::*;
