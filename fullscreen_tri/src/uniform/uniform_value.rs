use std::fmt;

use web_sys::WebGl2RenderingContext as Gl;

/// The uniform types a [UniformSlot](crate::uniform::UniformSlot) can be created for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UniformType {
    Float,
    FloatVector2,
    FloatVector3,
    FloatVector4,
    Integer,
}

impl UniformType {
    /// Maps a GL type id as reported by uniform reflection; `None` for types that are not
    /// supported.
    pub fn from_type_id(type_id: u32) -> Option<Self> {
        match type_id {
            Gl::FLOAT => Some(UniformType::Float),
            Gl::FLOAT_VEC2 => Some(UniformType::FloatVector2),
            Gl::FLOAT_VEC3 => Some(UniformType::FloatVector3),
            Gl::FLOAT_VEC4 => Some(UniformType::FloatVector4),
            Gl::INT => Some(UniformType::Integer),
            _ => None,
        }
    }

    pub fn type_id(&self) -> u32 {
        match self {
            UniformType::Float => Gl::FLOAT,
            UniformType::FloatVector2 => Gl::FLOAT_VEC2,
            UniformType::FloatVector3 => Gl::FLOAT_VEC3,
            UniformType::FloatVector4 => Gl::FLOAT_VEC4,
            UniformType::Integer => Gl::INT,
        }
    }
}

impl fmt::Display for UniformType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            UniformType::Float => "float",
            UniformType::FloatVector2 => "vec2",
            UniformType::FloatVector3 => "vec3",
            UniformType::FloatVector4 => "vec4",
            UniformType::Integer => "int",
        };

        f.write_str(name)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum UniformValue {
    Float(f32),
    FloatVector2((f32, f32)),
    FloatVector3((f32, f32, f32)),
    FloatVector4((f32, f32, f32, f32)),
    Integer(i32),
}

impl UniformValue {
    pub fn uniform_type(&self) -> UniformType {
        match self {
            UniformValue::Float(_) => UniformType::Float,
            UniformValue::FloatVector2(_) => UniformType::FloatVector2,
            UniformValue::FloatVector3(_) => UniformType::FloatVector3,
            UniformValue::FloatVector4(_) => UniformType::FloatVector4,
            UniformValue::Integer(_) => UniformType::Integer,
        }
    }
}

/// Rust types that can be written to a uniform of the matching [UniformType].
pub trait AsUniformValue: Copy {
    const UNIFORM_TYPE: UniformType;

    fn as_uniform_value(&self) -> UniformValue;
}

impl AsUniformValue for f32 {
    const UNIFORM_TYPE: UniformType = UniformType::Float;

    fn as_uniform_value(&self) -> UniformValue {
        UniformValue::Float(*self)
    }
}

impl AsUniformValue for (f32, f32) {
    const UNIFORM_TYPE: UniformType = UniformType::FloatVector2;

    fn as_uniform_value(&self) -> UniformValue {
        UniformValue::FloatVector2(*self)
    }
}

impl AsUniformValue for (f32, f32, f32) {
    const UNIFORM_TYPE: UniformType = UniformType::FloatVector3;

    fn as_uniform_value(&self) -> UniformValue {
        UniformValue::FloatVector3(*self)
    }
}

impl AsUniformValue for (f32, f32, f32, f32) {
    const UNIFORM_TYPE: UniformType = UniformType::FloatVector4;

    fn as_uniform_value(&self) -> UniformValue {
        UniformValue::FloatVector4(*self)
    }
}

impl AsUniformValue for i32 {
    const UNIFORM_TYPE: UniformType = UniformType::Integer;

    fn as_uniform_value(&self) -> UniformValue {
        UniformValue::Integer(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_round_trip() {
        for uniform_type in &[
            UniformType::Float,
            UniformType::FloatVector2,
            UniformType::FloatVector3,
            UniformType::FloatVector4,
            UniformType::Integer,
        ] {
            assert_eq!(
                UniformType::from_type_id(uniform_type.type_id()),
                Some(*uniform_type)
            );
        }
    }

    #[test]
    fn test_unsupported_type_id() {
        assert_eq!(UniformType::from_type_id(Gl::FLOAT_MAT4), None);
        assert_eq!(UniformType::from_type_id(Gl::SAMPLER_2D), None);
    }

    #[test]
    fn test_value_matches_declared_type() {
        assert_eq!(
            (800.0f32, 600.0f32).as_uniform_value(),
            UniformValue::FloatVector2((800.0, 600.0))
        );
        assert_eq!(
            (1.0f32, 2.0f32).as_uniform_value().uniform_type(),
            <(f32, f32)>::UNIFORM_TYPE
        );
        assert_eq!(7i32.as_uniform_value().uniform_type(), UniformType::Integer);
    }
}
