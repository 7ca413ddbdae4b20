use std::ops::Range;
use std::rc::Rc;

use fnv::FnvHashMap;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::WebGl2RenderingContext as Gl;

use crate::pipeline::{DrawCommand, FragmentShader, Topology, VertexShader};
use crate::runtime::state::ContextUpdate;
use crate::runtime::{Connection, GlContext};
use crate::task::{ContextId, GpuTask};
use crate::uniform::{AsUniformValue, UniformLookupError, UniformSlot, UniformType};

/// Returned when a vertex shader and a fragment shader cannot be linked into a [Program].
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("failed to link program: {log}")]
pub struct ShaderLinkingError {
    log: String,
}

impl ShaderLinkingError {
    pub fn log(&self) -> &str {
        &self.log
    }
}

impl From<ShaderLinkingError> for JsValue {
    fn from(error: ShaderLinkingError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

pub(crate) struct ActiveUniform<G>
where
    G: GlContext,
{
    pub(crate) location: G::UniformLocation,
    pub(crate) type_id: u32,
    pub(crate) size: i32,
}

struct ProgramData<G>
where
    G: GlContext,
{
    context_id: usize,
    gl_object: G::Program,
    uniforms: FnvHashMap<String, ActiveUniform<G>>,
}

/// A successfully linked GPU program.
///
/// A [Program] only exists once linking succeeded, so any command created from it is guaranteed
/// to use a linked program. Cloning a [Program] is cheap, clones refer to the same GPU object.
pub struct Program<G = Gl>
where
    G: GlContext,
{
    data: Rc<ProgramData<G>>,
}

impl<G> Program<G>
where
    G: GlContext,
{
    pub(crate) fn link(
        connection: &Connection<G>,
        vertex_shader: &VertexShader<G>,
        fragment_shader: &FragmentShader<G>,
    ) -> Result<Self, ShaderLinkingError> {
        let context_id = connection.context_id();

        if vertex_shader.data().context_id() != context_id
            || fragment_shader.data().context_id() != context_id
        {
            panic!("shaders must belong to the context that links them");
        }

        let gl = connection.gl();
        let program_object = gl.create_program().ok_or_else(|| ShaderLinkingError {
            log: "the context could not allocate a program object".to_string(),
        })?;

        gl.attach_shader(&program_object, vertex_shader.data().gl_object());
        gl.attach_shader(&program_object, fragment_shader.data().gl_object());
        gl.link_program(&program_object);

        if !gl.link_status(&program_object) {
            let log = gl.program_info_log(&program_object).unwrap_or_default();

            log::error!("program failed to link:\n{}", log);

            return Err(ShaderLinkingError { log });
        }

        let mut uniforms = FnvHashMap::default();

        for info in gl.active_uniforms(&program_object) {
            // Uniforms that are part of a uniform block have no location.
            if let Some(location) = gl.uniform_location(&program_object, &info.name) {
                let name = info.name.trim_end_matches("[0]").to_string();

                uniforms.insert(
                    name,
                    ActiveUniform {
                        location,
                        type_id: info.type_id,
                        size: info.size,
                    },
                );
            }
        }

        log::debug!(
            "linked program with {} active uniform(s) in context {}",
            uniforms.len(),
            context_id
        );

        Ok(Program {
            data: Rc::new(ProgramData {
                context_id,
                gl_object: program_object,
                uniforms,
            }),
        })
    }

    pub fn context_id(&self) -> usize {
        self.data.context_id
    }

    pub(crate) fn gl_object(&self) -> &G::Program {
        &self.data.gl_object
    }

    /// The names of the uniforms the driver reported as active after linking, in no particular
    /// order.
    pub fn active_uniform_names(&self) -> impl Iterator<Item = &str> {
        self.data.uniforms.keys().map(|name| name.as_str())
    }

    /// Looks up the uniform called `name` and returns a typed slot for it.
    ///
    /// Fails if the program has no active uniform with that name, or if the uniform's declared
    /// type does not match `T`:
    ///
    /// ```ignore
    /// let window_size = program.uniform::<(f32, f32)>("windowSize")?;
    /// ```
    pub fn uniform<T>(&self, name: &str) -> Result<UniformSlot<T, G>, UniformLookupError>
    where
        T: AsUniformValue,
    {
        let uniform = self
            .data
            .uniforms
            .get(name)
            .ok_or_else(|| UniformLookupError::NotFound(name.to_string()))?;

        if uniform.size == 1 && uniform.type_id == T::UNIFORM_TYPE.type_id() {
            return Ok(UniformSlot::new(
                self.clone(),
                name.to_string(),
                uniform.location.clone(),
            ));
        }

        match UniformType::from_type_id(uniform.type_id) {
            Some(actual) if uniform.size == 1 => Err(UniformLookupError::TypeMismatch {
                name: name.to_string(),
                expected: T::UNIFORM_TYPE,
                actual,
            }),
            _ => Err(UniformLookupError::Unsupported {
                name: name.to_string(),
                type_id: uniform.type_id,
                size: uniform.size,
            }),
        }
    }

    /// Returns a command that makes this the active program.
    pub fn use_command(&self) -> UseProgramCommand<G> {
        UseProgramCommand {
            program: self.clone(),
        }
    }

    /// Returns a command that draws the `vertices` with this program, assembling them into
    /// primitives according to the `topology`.
    ///
    /// No vertex buffers are bound; the vertex shader is expected to derive positions from
    /// `gl_VertexID`.
    pub fn draw_command(&self, topology: Topology, vertices: Range<u32>) -> DrawCommand<G> {
        DrawCommand::new(self.clone(), topology, vertices)
    }

    pub(crate) fn activate(&self, connection: &mut Connection<G>) {
        let (gl, state) = connection.unpack_mut();

        state.set_active_program(Some(self.gl_object())).apply(gl);
    }
}

impl<G> Clone for Program<G>
where
    G: GlContext,
{
    fn clone(&self) -> Self {
        Program {
            data: self.data.clone(),
        }
    }
}

/// Makes a [Program] the active program; see [Program::use_command].
///
/// Does not issue a GL call if the program already is the active program.
pub struct UseProgramCommand<G>
where
    G: GlContext,
{
    program: Program<G>,
}

impl<G> GpuTask<Connection<G>> for UseProgramCommand<G>
where
    G: GlContext,
{
    type Output = ();

    fn context_id(&self) -> ContextId {
        ContextId::Id(self.program.context_id())
    }

    fn execute(self, connection: &mut Connection<G>) -> Self::Output {
        self.program.activate(connection);
    }
}
