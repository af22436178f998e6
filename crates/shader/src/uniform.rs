use glam::{IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// A value for one GLSL uniform. The variant picks the `glUniform*` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    IVec2(IVec2),
    IVec3(IVec3),
    IVec4(IVec4),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat2(Mat2),
    Mat3(Mat3),
    Mat4(Mat4),
}

impl UniformValue {
    /// Integer scalar or vector from 1 to 4 components.
    pub fn from_ints(values: &[i32]) -> Option<Self> {
        match *values {
            [x] => Some(Self::Int(x)),
            [x, y] => Some(Self::IVec2(IVec2::new(x, y))),
            [x, y, z] => Some(Self::IVec3(IVec3::new(x, y, z))),
            [x, y, z, w] => Some(Self::IVec4(IVec4::new(x, y, z, w))),
            _ => None,
        }
    }

    /// Float scalar or vector from 1 to 4 components.
    pub fn from_floats(values: &[f32]) -> Option<Self> {
        match *values {
            [x] => Some(Self::Float(x)),
            [x, y] => Some(Self::Vec2(Vec2::new(x, y))),
            [x, y, z] => Some(Self::Vec3(Vec3::new(x, y, z))),
            [x, y, z, w] => Some(Self::Vec4(Vec4::new(x, y, z, w))),
            _ => None,
        }
    }

    /// Square matrix from a flat column-major buffer of 4, 9 or 16 floats.
    pub fn from_matrix(values: &[f32]) -> Option<Self> {
        match values.len() {
            4 => Some(Self::Mat2(Mat2::from_cols_slice(values))),
            9 => Some(Self::Mat3(Mat3::from_cols_slice(values))),
            16 => Some(Self::Mat4(Mat4::from_cols_slice(values))),
            _ => None,
        }
    }

    /// GLSL type name, used in diagnostics.
    pub fn glsl_type(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::IVec2(_) => "ivec2",
            Self::IVec3(_) => "ivec3",
            Self::IVec4(_) => "ivec4",
            Self::Float(_) => "float",
            Self::Vec2(_) => "vec2",
            Self::Vec3(_) => "vec3",
            Self::Vec4(_) => "vec4",
            Self::Mat2(_) => "mat2",
            Self::Mat3(_) => "mat3",
            Self::Mat4(_) => "mat4",
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for UniformValue {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        })*
    };
}

impl_from! {
    i32 => Int,
    IVec2 => IVec2,
    IVec3 => IVec3,
    IVec4 => IVec4,
    f32 => Float,
    Vec2 => Vec2,
    Vec3 => Vec3,
    Vec4 => Vec4,
    Mat2 => Mat2,
    Mat3 => Mat3,
    Mat4 => Mat4,
}

/// GLSL booleans are set through the integer path.
impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        Self::Int(value as i32)
    }
}

impl From<[f32; 2]> for UniformValue {
    fn from(value: [f32; 2]) -> Self {
        Self::Vec2(Vec2::from(value))
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(value: [f32; 3]) -> Self {
        Self::Vec3(Vec3::from(value))
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(value: [f32; 4]) -> Self {
        Self::Vec4(Vec4::from(value))
    }
}
