//! Typed access to a program's uniforms.

mod uniform_slot;
pub use self::uniform_slot::{SetUniformCommand, UniformLookupError, UniformSlot};

mod uniform_value;
pub use self::uniform_value::{AsUniformValue, UniformType, UniformValue};
