//! Draws a single full-screen triangle into a browser canvas with WebGL 2.0.
//!
//! The crate keeps the shape of a GPU task runtime: GPU work is described by [task::GpuTask]
//! values (shader compilation, program activation, uniform updates, draw calls) which are
//! submitted to a [runtime::RenderingContext] for execution. A context is obtained with
//! [runtime::init], which sizes a canvas to the browser viewport and requests a WebGL 2.0
//! context for it.
//!
//! [fullscreen::FullscreenTriangle] ties the pieces together: it links a program from a vertex and
//! a fragment shader, looks up the `windowSize` uniform and produces a frame task that sets that
//! uniform to the surface dimensions and draws 3 vertices as a triangle fan.
//!
//! Shader sources are usually kept in separate `.glsl` files next to the page; see
//! [shader_source::ShaderSourceLocation] for loading them.

pub mod fullscreen;
pub mod pipeline;
pub mod rendering;
pub mod runtime;
pub mod shader_source;
pub mod task;
pub mod uniform;

mod util;

#[cfg(test)]
mod test_util;
