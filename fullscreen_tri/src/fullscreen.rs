//! The fullscreen triangle: one program, one `windowSize` uniform and one draw call.
//!
//! The vertex shader is expected to generate the positions of 3 vertices from `gl_VertexID` (no
//! vertex buffers are bound) such that they cover the whole viewport. The program is drawn as a
//! single triangle fan:
//!
//! ```ignore
//! let (context, render_target) = single_threaded::init(&canvas, &ContextOptions::default())?;
//! let triangle = FullscreenTriangle::new(&context, &vertex_source, &fragment_source)?;
//!
//! context.submit(triangle.frame_task(&render_target));
//! ```

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::pipeline::{
    DrawCommand, Program, ShaderCompilationError, ShaderLinkingError, Topology,
    UseProgramCommand,
};
use crate::rendering::DefaultRenderTarget;
use crate::runtime::{Connection, GlContext, RenderingContext};
use crate::task::{sequence3, OptionTask, Sequence3};
use crate::uniform::{SetUniformCommand, UniformLookupError, UniformSlot};

/// The uniform that receives the drawing surface's dimensions in pixels, declared as
/// `uniform vec2 windowSize;`.
pub const WINDOW_SIZE_UNIFORM: &str = "windowSize";

pub const VERTEX_COUNT: u32 = 3;

#[derive(Debug, Error)]
pub enum CreateFullscreenTriangleError {
    #[error(transparent)]
    Compilation(#[from] ShaderCompilationError),
    #[error(transparent)]
    Linking(#[from] ShaderLinkingError),
    #[error(transparent)]
    Uniform(#[from] UniformLookupError),
}

impl From<CreateFullscreenTriangleError> for JsValue {
    fn from(error: CreateFullscreenTriangleError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

pub type FrameTask<G> = Sequence3<
    UseProgramCommand<G>,
    OptionTask<SetUniformCommand<(f32, f32), G>>,
    DrawCommand<G>,
    Connection<G>,
>;

pub struct FullscreenTriangle<G>
where
    G: GlContext,
{
    program: Program<G>,
    window_size: Option<UniformSlot<(f32, f32), G>>,
}

impl<G> FullscreenTriangle<G>
where
    G: GlContext,
{
    /// Compiles and links the shader pair and looks up the `windowSize` uniform.
    ///
    /// Fails with the driver's diagnostics if either shader does not compile or the program does
    /// not link. A program that does not use `windowSize` is accepted (the uniform is then never
    /// written), but a `windowSize` uniform of any type other than `vec2` is an error.
    pub fn new<Rc>(
        context: &Rc,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, CreateFullscreenTriangleError>
    where
        Rc: RenderingContext<Gl = G>,
    {
        let vertex_shader = context.create_vertex_shader(vertex_source)?;
        let fragment_shader = context.create_fragment_shader(fragment_source)?;
        let program = context.create_program(&vertex_shader, &fragment_shader)?;

        let window_size = match program.uniform::<(f32, f32)>(WINDOW_SIZE_UNIFORM) {
            Ok(slot) => Some(slot),
            Err(UniformLookupError::NotFound(_)) => {
                log::warn!(
                    "program has no active `{}` uniform, the window size will not be set",
                    WINDOW_SIZE_UNIFORM
                );

                None
            }
            Err(err) => return Err(err.into()),
        };

        Ok(FullscreenTriangle {
            program,
            window_size,
        })
    }

    pub fn program(&self) -> &Program<G> {
        &self.program
    }

    /// Returns a command that writes the `render_target`'s dimensions to `windowSize`, or an empty
    /// task if the program does not use `windowSize`.
    pub fn set_window_size_command(
        &self,
        render_target: &DefaultRenderTarget,
    ) -> OptionTask<SetUniformCommand<(f32, f32), G>> {
        let (width, height) = render_target.dimensions();

        self.window_size
            .as_ref()
            .map(|slot| slot.set_command((width as f32, height as f32)))
            .into()
    }

    /// Returns a command that draws the triangle: 3 vertices assembled as a triangle fan.
    pub fn draw_command(&self) -> DrawCommand<G> {
        self.program
            .draw_command(Topology::TriangleFan, 0..VERTEX_COUNT)
    }

    /// Activates the program, sets `windowSize` and draws, in that order.
    pub fn frame_task(&self, render_target: &DefaultRenderTarget) -> FrameTask<G> {
        sequence3(
            self.program.use_command(),
            self.set_window_size_command(render_target),
            self.draw_command(),
        )
    }
}
