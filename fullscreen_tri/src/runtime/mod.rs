//! Provides rendering contexts that act as the main point of interaction with the GPU.
//!
//! Only a single threaded runtime is provided, see [single_threaded]. The GPU itself is reached
//! through the [GlContext] trait, which is implemented for [web_sys::WebGl2RenderingContext].

mod context_options;
pub use self::context_options::{ContextOptions, ContextOptionsBuilder, PowerPreference};

mod gl_context;
pub use self::gl_context::{ActiveUniformInfo, GlContext};

mod rendering_context;
pub use self::rendering_context::{Connection, RenderingContext};

pub mod single_threaded;
pub use self::single_threaded::{init, InitError, SingleThreadedContext};

pub mod state;
