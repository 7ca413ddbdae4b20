use std::fmt;

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::WebGl2RenderingContext as Gl;

use crate::runtime::{Connection, GlContext};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn id(&self) -> u32 {
        match self {
            ShaderStage::Vertex => Gl::VERTEX_SHADER,
            ShaderStage::Fragment => Gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Returned when the driver rejects a shader's source code.
///
/// The [log](ShaderCompilationError::log) holds the compiler diagnostics exactly as reported by the
/// driver.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("failed to compile {stage} shader: {log}")]
pub struct ShaderCompilationError {
    stage: ShaderStage,
    log: String,
}

impl ShaderCompilationError {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn log(&self) -> &str {
        &self.log
    }
}

impl From<ShaderCompilationError> for JsValue {
    fn from(error: ShaderCompilationError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

pub(crate) struct ShaderData<G>
where
    G: GlContext,
{
    context_id: usize,
    gl_object: G::Shader,
}

impl<G> ShaderData<G>
where
    G: GlContext,
{
    fn compile(
        connection: &Connection<G>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self, ShaderCompilationError> {
        let gl = connection.gl();
        let shader_object = gl.create_shader(stage).ok_or_else(|| ShaderCompilationError {
            stage,
            log: "the context could not allocate a shader object".to_string(),
        })?;

        gl.shader_source(&shader_object, source);
        gl.compile_shader(&shader_object);

        let log = gl.shader_info_log(&shader_object).unwrap_or_default();

        if !gl.compile_status(&shader_object) {
            log::error!("{} shader failed to compile:\n{}", stage, log);

            return Err(ShaderCompilationError { stage, log });
        }

        if !log.trim().is_empty() {
            log::warn!("{} shader compiled with diagnostics:\n{}", stage, log);
        }

        log::debug!("compiled {} shader ({} bytes of source)", stage, source.len());

        Ok(ShaderData {
            context_id: connection.context_id(),
            gl_object: shader_object,
        })
    }

    pub(crate) fn context_id(&self) -> usize {
        self.context_id
    }

    pub(crate) fn gl_object(&self) -> &G::Shader {
        &self.gl_object
    }
}

/// A compiled vertex shader; create one with
/// [RenderingContext::create_vertex_shader](crate::runtime::RenderingContext::create_vertex_shader).
pub struct VertexShader<G = Gl>
where
    G: GlContext,
{
    data: ShaderData<G>,
}

impl<G> VertexShader<G>
where
    G: GlContext,
{
    pub(crate) fn new(
        connection: &Connection<G>,
        source: &str,
    ) -> Result<Self, ShaderCompilationError> {
        ShaderData::compile(connection, ShaderStage::Vertex, source).map(|data| VertexShader { data })
    }

    pub(crate) fn data(&self) -> &ShaderData<G> {
        &self.data
    }
}

/// A compiled fragment shader; create one with
/// [RenderingContext::create_fragment_shader](crate::runtime::RenderingContext::create_fragment_shader).
pub struct FragmentShader<G = Gl>
where
    G: GlContext,
{
    data: ShaderData<G>,
}

impl<G> FragmentShader<G>
where
    G: GlContext,
{
    pub(crate) fn new(
        connection: &Connection<G>,
        source: &str,
    ) -> Result<Self, ShaderCompilationError> {
        ShaderData::compile(connection, ShaderStage::Fragment, source)
            .map(|data| FragmentShader { data })
    }

    pub(crate) fn data(&self) -> &ShaderData<G> {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{RenderingContext, SingleThreadedContext};
    use crate::test_util::{GlCall, RecordingGl, FRAGMENT_SOURCE, VERTEX_SOURCE};

    #[test]
    fn test_compile_valid_shaders() {
        let gl = RecordingGl::new();
        let context = SingleThreadedContext::from_gl_context(gl.clone());

        let vertex_shader = context.create_vertex_shader(VERTEX_SOURCE).unwrap();
        let fragment_shader = context.create_fragment_shader(FRAGMENT_SOURCE).unwrap();

        assert_eq!(vertex_shader.data().context_id(), context.id());
        assert_eq!(fragment_shader.data().context_id(), context.id());
        assert_eq!(
            gl.calls(),
            vec![
                GlCall::CreateShader(ShaderStage::Vertex),
                GlCall::CompileShader(0),
                GlCall::CreateShader(ShaderStage::Fragment),
                GlCall::CompileShader(1),
            ]
        );
    }

    #[test]
    fn test_compile_with_diagnostics_succeeds() {
        let gl = RecordingGl::new().warn_on(
            "gl_VertexID",
            "WARNING: 0:4: 'gl_VertexID' : implicit conversion may lose precision",
        );
        let context = SingleThreadedContext::from_gl_context(gl.clone());

        let vertex_shader = context.create_vertex_shader(VERTEX_SOURCE);

        assert!(vertex_shader.is_ok());
        assert!(context.create_fragment_shader(FRAGMENT_SOURCE).is_ok());
        assert_eq!(
            gl.shader_info_log(&0).unwrap(),
            "WARNING: 0:4: 'gl_VertexID' : implicit conversion may lose precision"
        );
        assert_eq!(gl.shader_info_log(&1).unwrap(), "");
        assert_eq!(
            gl.calls(),
            vec![
                GlCall::CreateShader(ShaderStage::Vertex),
                GlCall::CompileShader(0),
                GlCall::CreateShader(ShaderStage::Fragment),
                GlCall::CompileShader(1),
            ]
        );
    }

    #[test]
    fn test_vertex_compile_error_carries_driver_log() {
        let gl = RecordingGl::new()
            .fail_compilation_on("gl_Positon", "ERROR: 0:4: 'gl_Positon' : undeclared identifier");
        let context = SingleThreadedContext::from_gl_context(gl);
        let source = VERTEX_SOURCE.replace("gl_Position", "gl_Positon");

        let error = context.create_vertex_shader(&source).err().unwrap();

        assert_eq!(error.stage(), ShaderStage::Vertex);
        assert_eq!(
            error.log(),
            "ERROR: 0:4: 'gl_Positon' : undeclared identifier"
        );
        assert!(error
            .to_string()
            .contains("vertex shader: ERROR: 0:4: 'gl_Positon' : undeclared identifier"));
    }

    #[test]
    fn test_fragment_compile_error_carries_driver_log() {
        let gl = RecordingGl::new().fail_compilation_on("vec5", "ERROR: 0:7: 'vec5' : no matching overloaded function found");
        let context = SingleThreadedContext::from_gl_context(gl);
        let source = FRAGMENT_SOURCE.replace("vec4(", "vec5(");

        let error = context.create_fragment_shader(&source).err().unwrap();

        assert_eq!(error.stage(), ShaderStage::Fragment);
        assert!(error.log().contains("'vec5' : no matching overloaded function found"));
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
