//! The drawing surface and its viewport.

mod default_render_target;
pub use self::default_render_target::{surface_dimensions, DefaultRenderTarget};

mod viewport;
pub use self::viewport::ViewportCommand;
