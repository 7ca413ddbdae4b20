//! A [GlContext] that records the calls it receives instead of talking to a GPU.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::WebGl2RenderingContext as Gl;

use crate::pipeline::{ShaderStage, Topology};
use crate::runtime::{ActiveUniformInfo, GlContext};
use crate::uniform::UniformValue;

pub(crate) const VERTEX_SOURCE: &str = r#"#version 300 es

void main() {
    vec2 position = vec2(float((gl_VertexID & 1) << 2), float((gl_VertexID & 2) << 1)) - 1.0;
    gl_Position = vec4(position, 0.0, 1.0);
}
"#;

pub(crate) const FRAGMENT_SOURCE: &str = r#"#version 300 es
precision highp float;

uniform vec2 windowSize;

out vec4 fragColor;

void main() {
    vec2 uv = gl_FragCoord.xy / windowSize;
    fragColor = vec4(uv, 0.5 + 0.5 * uv.x * uv.y, 1.0);
}
"#;

#[derive(Clone, PartialEq, Debug)]
pub(crate) enum GlCall {
    CreateShader(ShaderStage),
    CompileShader(u32),
    CreateProgram,
    LinkProgram(u32),
    UseProgram(Option<u32>),
    Uniform(String, UniformValue),
    Viewport(i32, i32, i32, i32),
    DrawArrays(Topology, i32, i32),
}

#[derive(Clone, PartialEq, Debug)]
pub(crate) struct Location {
    program: u32,
    name: String,
}

struct MockShader {
    source: String,
    compiled: bool,
    log: String,
}

struct MockProgram {
    shaders: Vec<u32>,
    linked: bool,
    log: String,
}

#[derive(Default)]
struct Recording {
    calls: Vec<GlCall>,
    shaders: Vec<MockShader>,
    programs: Vec<MockProgram>,
    compile_errors: Vec<(String, String)>,
    compile_warnings: Vec<(String, String)>,
    link_error: Option<String>,
}

/// Cloning a [RecordingGl] yields a handle to the same recording.
#[derive(Clone, Default)]
pub(crate) struct RecordingGl {
    recording: Rc<RefCell<Recording>>,
}

impl RecordingGl {
    pub(crate) fn new() -> Self {
        RecordingGl::default()
    }

    /// Compiling a source that contains `marker` fails with the given info `log`.
    pub(crate) fn fail_compilation_on(self, marker: &str, log: &str) -> Self {
        self.recording
            .borrow_mut()
            .compile_errors
            .push((marker.to_string(), log.to_string()));

        self
    }

    /// Compiling a source that contains `marker` succeeds, but leaves the given info `log`.
    pub(crate) fn warn_on(self, marker: &str, log: &str) -> Self {
        self.recording
            .borrow_mut()
            .compile_warnings
            .push((marker.to_string(), log.to_string()));

        self
    }

    /// Linking any program fails with the given info `log`.
    pub(crate) fn fail_linking(self, log: &str) -> Self {
        self.recording.borrow_mut().link_error = Some(log.to_string());

        self
    }

    pub(crate) fn calls(&self) -> Vec<GlCall> {
        self.recording.borrow().calls.clone()
    }

    fn record(&self, call: GlCall) {
        self.recording.borrow_mut().calls.push(call);
    }
}

/// Extracts `uniform` declarations from GLSL source, one declaration per line.
fn declared_uniforms(source: &str) -> Vec<ActiveUniformInfo> {
    source
        .lines()
        .filter_map(|line| {
            let mut tokens = line.trim().trim_end_matches(';').split_whitespace();

            if tokens.next() != Some("uniform") {
                return None;
            }

            let mut type_name = tokens.next()?;

            if ["lowp", "mediump", "highp"].contains(&type_name) {
                type_name = tokens.next()?;
            }

            let declarator = tokens.next()?;

            let type_id = match type_name {
                "float" => Gl::FLOAT,
                "vec2" => Gl::FLOAT_VEC2,
                "vec3" => Gl::FLOAT_VEC3,
                "vec4" => Gl::FLOAT_VEC4,
                "int" => Gl::INT,
                "mat4" => Gl::FLOAT_MAT4,
                "sampler2D" => Gl::SAMPLER_2D,
                _ => return None,
            };

            let (name, size) = match declarator.find('[') {
                Some(index) => {
                    let size = declarator[index + 1..]
                        .trim_end_matches(']')
                        .parse()
                        .ok()?;

                    (format!("{}[0]", &declarator[..index]), size)
                }
                None => (declarator.to_string(), 1),
            };

            Some(ActiveUniformInfo {
                name,
                type_id,
                size,
            })
        })
        .collect()
}

impl GlContext for RecordingGl {
    type Shader = u32;

    type Program = u32;

    type UniformLocation = Location;

    fn create_shader(&self, stage: ShaderStage) -> Option<u32> {
        self.record(GlCall::CreateShader(stage));

        let mut recording = self.recording.borrow_mut();

        recording.shaders.push(MockShader {
            source: String::new(),
            compiled: false,
            log: String::new(),
        });

        Some(recording.shaders.len() as u32 - 1)
    }

    fn shader_source(&self, shader: &u32, source: &str) {
        self.recording.borrow_mut().shaders[*shader as usize].source = source.to_string();
    }

    fn compile_shader(&self, shader: &u32) {
        self.record(GlCall::CompileShader(*shader));

        let mut recording = self.recording.borrow_mut();
        let source = recording.shaders[*shader as usize].source.clone();
        let find_log = |markers: &[(String, String)]| {
            markers
                .iter()
                .find(|(marker, _)| source.contains(marker.as_str()))
                .map(|(_, log)| log.clone())
        };
        let error = find_log(recording.compile_errors.as_slice());
        let warning = find_log(recording.compile_warnings.as_slice());
        let mock = &mut recording.shaders[*shader as usize];

        match error {
            Some(log) => {
                mock.compiled = false;
                mock.log = log;
            }
            None => {
                mock.compiled = true;
                mock.log = warning.unwrap_or_default();
            }
        }
    }

    fn compile_status(&self, shader: &u32) -> bool {
        self.recording.borrow().shaders[*shader as usize].compiled
    }

    fn shader_info_log(&self, shader: &u32) -> Option<String> {
        Some(self.recording.borrow().shaders[*shader as usize].log.clone())
    }

    fn create_program(&self) -> Option<u32> {
        self.record(GlCall::CreateProgram);

        let mut recording = self.recording.borrow_mut();

        recording.programs.push(MockProgram {
            shaders: Vec::new(),
            linked: false,
            log: String::new(),
        });

        Some(recording.programs.len() as u32 - 1)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.recording.borrow_mut().programs[*program as usize]
            .shaders
            .push(*shader);
    }

    fn link_program(&self, program: &u32) {
        self.record(GlCall::LinkProgram(*program));

        let mut recording = self.recording.borrow_mut();
        let link_error = recording.link_error.clone();
        let mock = &mut recording.programs[*program as usize];

        match link_error {
            Some(log) => {
                mock.linked = false;
                mock.log = log;
            }
            None => {
                mock.linked = true;
                mock.log = String::new();
            }
        }
    }

    fn link_status(&self, program: &u32) -> bool {
        self.recording.borrow().programs[*program as usize].linked
    }

    fn program_info_log(&self, program: &u32) -> Option<String> {
        Some(self.recording.borrow().programs[*program as usize].log.clone())
    }

    fn active_uniforms(&self, program: &u32) -> Vec<ActiveUniformInfo> {
        let recording = self.recording.borrow();
        let mut uniforms: Vec<ActiveUniformInfo> = Vec::new();

        for shader in &recording.programs[*program as usize].shaders {
            for uniform in declared_uniforms(&recording.shaders[*shader as usize].source) {
                if !uniforms.iter().any(|u| u.name == uniform.name) {
                    uniforms.push(uniform);
                }
            }
        }

        uniforms
    }

    fn uniform_location(&self, program: &u32, name: &str) -> Option<Location> {
        let is_active = self
            .active_uniforms(program)
            .iter()
            .any(|uniform| uniform.name == name);

        if is_active {
            Some(Location {
                program: *program,
                name: name.trim_end_matches("[0]").to_string(),
            })
        } else {
            None
        }
    }

    fn use_program(&self, program: Option<&u32>) {
        self.record(GlCall::UseProgram(program.copied()));
    }

    fn uniform(&self, location: &Location, value: UniformValue) {
        self.record(GlCall::Uniform(location.name.clone(), value));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        self.record(GlCall::DrawArrays(topology, first, count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_uniforms() {
        let uniforms = declared_uniforms(
            "uniform highp vec2 windowSize;\nuniform float lights[4];\nuniform Block { vec4 a; };",
        );

        assert_eq!(
            uniforms,
            vec![
                ActiveUniformInfo {
                    name: "windowSize".to_string(),
                    type_id: Gl::FLOAT_VEC2,
                    size: 1,
                },
                ActiveUniformInfo {
                    name: "lights[0]".to_string(),
                    type_id: Gl::FLOAT,
                    size: 4,
                },
            ]
        );
    }
}
