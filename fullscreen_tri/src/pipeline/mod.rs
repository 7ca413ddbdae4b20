//! Shaders, programs and the commands that draw with them.

mod draw_command;
pub use self::draw_command::DrawCommand;

mod primitive_assembly;
pub use self::primitive_assembly::Topology;

mod program;
pub use self::program::{Program, ShaderLinkingError, UseProgramCommand};

mod shader;
pub use self::shader::{FragmentShader, ShaderCompilationError, ShaderStage, VertexShader};
