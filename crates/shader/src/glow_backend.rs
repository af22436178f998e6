use crate::backend::{ShaderBackend, ShaderStage};
use crate::uniform::UniformValue;
use glow::HasContext;

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

// SAFETY (all blocks below): callers hold a current context, see
// `ShaderBackend`. Handles passed in were created by this same context.
impl ShaderBackend for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<glow::Shader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn compile_shader(&self, shader: glow::Shader, source: &str) -> bool {
        unsafe {
            self.shader_source(shader, source);
            HasContext::compile_shader(self, shader);
            self.get_shader_compile_status(shader)
        }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: glow::Program) -> bool {
        unsafe {
            HasContext::link_program(self, program);
            self.get_program_link_status(program)
        }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn uniform_location(&self, program: glow::Program, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.get_uniform_location(program, name) }
    }

    fn set_uniform(&self, location: &glow::UniformLocation, value: &UniformValue) {
        let loc = Some(location);
        unsafe {
            match *value {
                UniformValue::Int(x) => self.uniform_1_i32(loc, x),
                UniformValue::IVec2(v) => self.uniform_2_i32(loc, v.x, v.y),
                UniformValue::IVec3(v) => self.uniform_3_i32(loc, v.x, v.y, v.z),
                UniformValue::IVec4(v) => self.uniform_4_i32(loc, v.x, v.y, v.z, v.w),
                UniformValue::Float(x) => self.uniform_1_f32(loc, x),
                UniformValue::Vec2(v) => self.uniform_2_f32(loc, v.x, v.y),
                UniformValue::Vec3(v) => self.uniform_3_f32(loc, v.x, v.y, v.z),
                UniformValue::Vec4(v) => self.uniform_4_f32(loc, v.x, v.y, v.z, v.w),
                UniformValue::Mat2(m) => self.uniform_matrix_2_f32_slice(loc, false, &m.to_cols_array()),
                UniformValue::Mat3(m) => self.uniform_matrix_3_f32_slice(loc, false, &m.to_cols_array()),
                UniformValue::Mat4(m) => self.uniform_matrix_4_f32_slice(loc, false, &m.to_cols_array()),
            }
        }
    }
}
