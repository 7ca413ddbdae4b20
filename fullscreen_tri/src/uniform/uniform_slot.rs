use std::marker;

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::WebGl2RenderingContext as Gl;

use crate::pipeline::Program;
use crate::runtime::{Connection, GlContext};
use crate::task::{ContextId, GpuTask};
use crate::uniform::{AsUniformValue, UniformType};

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum UniformLookupError {
    #[error("the program has no active uniform named `{0}`")]
    NotFound(String),
    #[error("uniform `{name}` is declared as `{actual}`, but `{expected}` was requested")]
    TypeMismatch {
        name: String,
        expected: UniformType,
        actual: UniformType,
    },
    #[error("uniform `{name}` has unsupported GL type 0x{type_id:04X} (array size {size})")]
    Unsupported { name: String, type_id: u32, size: i32 },
}

impl From<UniformLookupError> for JsValue {
    fn from(error: UniformLookupError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

/// A typed handle to one of a [Program]'s uniforms; see [Program::uniform].
///
/// Pairs the uniform's location with a setter that only accepts values of type `T`.
pub struct UniformSlot<T, G = Gl>
where
    G: GlContext,
{
    program: Program<G>,
    name: String,
    location: G::UniformLocation,
    _marker: marker::PhantomData<T>,
}

impl<T, G> UniformSlot<T, G>
where
    T: AsUniformValue,
    G: GlContext,
{
    pub(crate) fn new(program: Program<G>, name: String, location: G::UniformLocation) -> Self {
        UniformSlot {
            program,
            name,
            location,
            _marker: marker::PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a command that writes `value` to this uniform.
    ///
    /// The command makes the uniform's program the active program first, if it is not active
    /// already.
    pub fn set_command(&self, value: T) -> SetUniformCommand<T, G> {
        SetUniformCommand {
            program: self.program.clone(),
            location: self.location.clone(),
            value,
        }
    }
}

pub struct SetUniformCommand<T, G>
where
    G: GlContext,
{
    program: Program<G>,
    location: G::UniformLocation,
    value: T,
}

impl<T, G> GpuTask<Connection<G>> for SetUniformCommand<T, G>
where
    T: AsUniformValue,
    G: GlContext,
{
    type Output = ();

    fn context_id(&self) -> ContextId {
        ContextId::Id(self.program.context_id())
    }

    fn execute(self, connection: &mut Connection<G>) -> Self::Output {
        let value = self.value.as_uniform_value();

        debug_assert_eq!(value.uniform_type(), T::UNIFORM_TYPE);

        self.program.activate(connection);

        log::trace!("writing {} uniform value", value.uniform_type());

        connection.gl().uniform(&self.location, value);
    }
}
