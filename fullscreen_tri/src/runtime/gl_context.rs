use web_sys::{WebGl2RenderingContext as Gl, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::pipeline::{ShaderStage, Topology};
use crate::uniform::UniformValue;

/// Description of an active uniform as reported by the driver after a program was linked.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActiveUniformInfo {
    pub name: String,
    pub type_id: u32,
    pub size: i32,
}

/// The subset of the WebGL 2.0 API this crate drives.
///
/// Implemented for [web_sys::WebGl2RenderingContext]. All state tracking happens in
/// [DynamicState](crate::runtime::state::DynamicState), implementations forward calls straight to
/// the driver.
pub trait GlContext {
    type Shader: Clone;

    type Program: Clone + PartialEq;

    type UniformLocation: Clone;

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;

    fn shader_source(&self, shader: &Self::Shader, source: &str);

    fn compile_shader(&self, shader: &Self::Shader);

    fn compile_status(&self, shader: &Self::Shader) -> bool;

    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;

    fn create_program(&self) -> Option<Self::Program>;

    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);

    fn link_program(&self, program: &Self::Program);

    fn link_status(&self, program: &Self::Program) -> bool;

    fn program_info_log(&self, program: &Self::Program) -> Option<String>;

    fn active_uniforms(&self, program: &Self::Program) -> Vec<ActiveUniformInfo>;

    fn uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;

    fn use_program(&self, program: Option<&Self::Program>);

    fn uniform(&self, location: &Self::UniformLocation, value: UniformValue);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32);
}

impl GlContext for Gl {
    type Shader = WebGlShader;

    type Program = WebGlProgram;

    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        Gl::create_shader(self, stage.id())
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        Gl::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        Gl::compile_shader(self, shader);
    }

    fn compile_status(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, Gl::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        Gl::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        Gl::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        Gl::link_program(self, program);
    }

    fn link_status(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn active_uniforms(&self, program: &WebGlProgram) -> Vec<ActiveUniformInfo> {
        let count = self
            .get_program_parameter(program, Gl::ACTIVE_UNIFORMS)
            .as_f64()
            .unwrap_or(0.0) as u32;

        (0..count)
            .filter_map(|index| self.get_active_uniform(program, index))
            .map(|info| ActiveUniformInfo {
                name: info.name(),
                type_id: info.type_(),
                size: info.size(),
            })
            .collect()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn use_program(&self, program: Option<&WebGlProgram>) {
        Gl::use_program(self, program);
    }

    fn uniform(&self, location: &WebGlUniformLocation, value: UniformValue) {
        let location = Some(location);

        match value {
            UniformValue::Float(x) => self.uniform1f(location, x),
            UniformValue::FloatVector2((x, y)) => self.uniform2f(location, x, y),
            UniformValue::FloatVector3((x, y, z)) => self.uniform3f(location, x, y, z),
            UniformValue::FloatVector4((x, y, z, w)) => self.uniform4f(location, x, y, z, w),
            UniformValue::Integer(x) => self.uniform1i(location, x),
        }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        Gl::viewport(self, x, y, width, height);
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        Gl::draw_arrays(self, topology.id(), first, count);
    }
}
