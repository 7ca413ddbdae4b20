use crate::pipeline::{
    FragmentShader, Program, ShaderCompilationError, ShaderLinkingError, VertexShader,
};
use crate::runtime::state::DynamicState;
use crate::runtime::GlContext;
use crate::task::GpuTask;

/// The main point of interaction with the GPU.
///
/// A rendering context owns a GL context and tracks its state. GPU objects are created through
/// the rendering context; work that uses these objects is described by [GpuTask]s which are then
/// executed with [submit](RenderingContext::submit).
pub trait RenderingContext {
    type Gl: GlContext;

    /// Identifies this context; tasks bound to other contexts cannot be submitted to it.
    fn id(&self) -> usize;

    /// Creates and compiles a vertex shader from the given GLSL ES 3.0 source.
    ///
    /// Returns an error carrying the driver's info log if compilation fails.
    fn create_vertex_shader(
        &self,
        source: &str,
    ) -> Result<VertexShader<Self::Gl>, ShaderCompilationError>;

    /// Creates and compiles a fragment shader from the given GLSL ES 3.0 source.
    ///
    /// Returns an error carrying the driver's info log if compilation fails.
    fn create_fragment_shader(
        &self,
        source: &str,
    ) -> Result<FragmentShader<Self::Gl>, ShaderCompilationError>;

    /// Links a vertex shader and a fragment shader into a [Program].
    ///
    /// # Panics
    ///
    /// Panics if either shader was created by a different context.
    fn create_program(
        &self,
        vertex_shader: &VertexShader<Self::Gl>,
        fragment_shader: &FragmentShader<Self::Gl>,
    ) -> Result<Program<Self::Gl>, ShaderLinkingError>;

    /// Executes the `task` and returns its output.
    ///
    /// # Panics
    ///
    /// Panics if the task is bound to a different context.
    fn submit<T>(&self, task: T) -> T::Output
    where
        T: GpuTask<Connection<Self::Gl>>;
}

/// The execution context for tasks: the GL context together with its tracked state.
pub struct Connection<G>
where
    G: GlContext,
{
    context_id: usize,
    gl: G,
    state: DynamicState<G::Program>,
}

impl<G> Connection<G>
where
    G: GlContext,
{
    pub fn new(context_id: usize, gl: G) -> Self {
        Connection {
            context_id,
            gl,
            state: DynamicState::initial(),
        }
    }

    pub fn context_id(&self) -> usize {
        self.context_id
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }

    /// Splits the connection so that state updates can be applied to the GL context.
    pub fn unpack_mut(&mut self) -> (&G, &mut DynamicState<G::Program>) {
        (&self.gl, &mut self.state)
    }
}
