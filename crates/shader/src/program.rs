use crate::backend::{ShaderBackend, ShaderStage};
use crate::error::ShaderError;
use crate::source;
use crate::uniform::UniformValue;

/// What to do when a uniform name does not resolve to a location.
///
/// Drivers can legitimately hit this when the GLSL compiler strips a
/// uniform that does not contribute to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingUniform {
    /// Treat the lookup failure as a programming error.
    #[default]
    Panic,
    /// Log a warning and skip the upload.
    Ignore,
}

/// A linked vertex + fragment program.
pub struct ShaderProgram<B: ShaderBackend> {
    program: B::Program,
    missing_uniform: MissingUniform,
}

impl<B: ShaderBackend> std::fmt::Debug for ShaderProgram<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("program", &self.program)
            .field("missing_uniform", &self.missing_uniform)
            .finish()
    }
}

impl<B: ShaderBackend> ShaderProgram<B> {
    /// Build a program from two sources, each either a file path or GLSL text.
    pub fn new(backend: &B, vertex: &str, fragment: &str) -> Result<Self, ShaderError> {
        let vertex = source::resolve(vertex);
        let fragment = source::resolve(fragment);
        Self::from_glsl(backend, &vertex, &fragment)
    }

    /// Build a program from literal GLSL text.
    pub fn from_glsl(backend: &B, vertex: &str, fragment: &str) -> Result<Self, ShaderError> {
        let vs = compile_stage(backend, ShaderStage::Vertex, vertex)?;
        let fs = match compile_stage(backend, ShaderStage::Fragment, fragment) {
            Ok(fs) => fs,
            Err(e) => {
                backend.delete_shader(vs);
                return Err(e);
            }
        };

        let linked = link(backend, &[vs, fs]);
        backend.delete_shader(vs);
        backend.delete_shader(fs);

        let program = linked?;
        tracing::info!(?program, "shader program linked");
        Ok(Self {
            program,
            missing_uniform: MissingUniform::default(),
        })
    }

    pub fn with_missing_uniform(mut self, policy: MissingUniform) -> Self {
        self.missing_uniform = policy;
        self
    }

    pub fn id(&self) -> B::Program {
        self.program
    }

    /// Make this the program used by subsequent draw calls.
    pub fn activate(&self, backend: &B) {
        backend.use_program(Some(self.program));
    }

    /// Upload a typed value to the uniform `name`.
    ///
    /// # Panics
    /// If `name` is not an active uniform and the policy is [`MissingUniform::Panic`].
    pub fn set_uniform(&self, backend: &B, name: &str, value: impl Into<UniformValue>) {
        let value = value.into();
        if let Some(location) = self.location(backend, name, &value) {
            backend.set_uniform(&location, &value);
        }
    }

    /// Upload an `int`/`ivecN` uniform chosen by the number of values.
    ///
    /// # Panics
    /// If `values` does not hold 1 to 4 components, or on a missing uniform.
    pub fn set_ints(&self, backend: &B, name: &str, values: &[i32]) {
        let value = UniformValue::from_ints(values)
            .unwrap_or_else(|| panic!("uniform `{name}`: {} int components, expected 1 to 4", values.len()));
        self.set_uniform(backend, name, value);
    }

    /// Upload a `float`/`vecN` uniform chosen by the number of values.
    ///
    /// # Panics
    /// If `values` does not hold 1 to 4 components, or on a missing uniform.
    pub fn set_floats(&self, backend: &B, name: &str, values: &[f32]) {
        let value = UniformValue::from_floats(values)
            .unwrap_or_else(|| panic!("uniform `{name}`: {} float components, expected 1 to 4", values.len()));
        self.set_uniform(backend, name, value);
    }

    /// Upload a square matrix from a flat column-major buffer.
    ///
    /// # Panics
    /// If `values` is not 4, 9 or 16 floats long, or on a missing uniform.
    pub fn set_matrix(&self, backend: &B, name: &str, values: &[f32]) {
        let value = UniformValue::from_matrix(values)
            .unwrap_or_else(|| panic!("uniform `{name}`: {} matrix elements, expected 4, 9 or 16", values.len()));
        self.set_uniform(backend, name, value);
    }

    /// Delete the GL program. Consumes `self`, so it runs at most once.
    pub fn release(self, backend: &B) {
        tracing::debug!(program = ?self.program, "shader program released");
        backend.delete_program(self.program);
    }

    fn location(&self, backend: &B, name: &str, value: &UniformValue) -> Option<B::UniformLocation> {
        let location = backend.uniform_location(self.program, name);
        if location.is_none() {
            match self.missing_uniform {
                MissingUniform::Panic => {
                    panic!("uniform `{name}` ({}) is not active in program {:?}", value.glsl_type(), self.program)
                }
                MissingUniform::Ignore => {
                    tracing::warn!(uniform = name, program = ?self.program, "uniform not found, skipping");
                }
            }
        }
        location
    }
}

fn compile_stage<B: ShaderBackend>(backend: &B, stage: ShaderStage, source: &str) -> Result<B::Shader, ShaderError> {
    let shader = backend.create_shader(stage).map_err(|reason| ShaderError::Create {
        object: match stage {
            ShaderStage::Vertex => "vertex shader",
            ShaderStage::Fragment => "fragment shader",
        },
        reason,
    })?;

    if !backend.compile_shader(shader, source) {
        let log = clean_log(backend.shader_info_log(shader));
        backend.delete_shader(shader);
        tracing::error!(%stage, "shader compilation failed");
        return Err(ShaderError::Compile { stage, log });
    }

    tracing::debug!(%stage, ?shader, "shader compiled");
    Ok(shader)
}

fn link<B: ShaderBackend>(backend: &B, shaders: &[B::Shader]) -> Result<B::Program, ShaderError> {
    let program = backend.create_program().map_err(|reason| ShaderError::Create {
        object: "shader program",
        reason,
    })?;

    for &shader in shaders {
        backend.attach_shader(program, shader);
    }

    if !backend.link_program(program) {
        let log = clean_log(backend.program_info_log(program));
        backend.delete_program(program);
        tracing::error!("shader program link failed");
        return Err(ShaderError::Link { log });
    }

    for &shader in shaders {
        backend.detach_shader(program, shader);
    }

    Ok(program)
}

/// Drivers pad info logs with NULs and trailing newlines.
fn clean_log(log: String) -> String {
    log.trim_end_matches(['\0', '\n', '\r', ' ']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{Call, FakeGl};
    use glam::{Mat4, Vec3};

    const VERTEX: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
out vec3 ourColor;
uniform mat4 model;
void main()
{
    gl_Position = model * vec4(aPos, 1.0);
    ourColor = aPos;
}"#;

    const FRAGMENT: &str = r#"#version 330 core
in vec3 ourColor;
out vec4 FragColor;
uniform vec4 tint;
uniform int mode;
void main()
{
    FragColor = vec4(ourColor, 1.0) * tint;
}"#;

    const MISMATCHED_FRAGMENT: &str = r#"#version 330 core
in vec2 TexCoord;
out vec4 FragColor;
void main()
{
    FragColor = vec4(TexCoord, 0.0, 1.0);
}"#;

    fn program(gl: &FakeGl) -> ShaderProgram<FakeGl> {
        ShaderProgram::from_glsl(gl, VERTEX, FRAGMENT).unwrap()
    }

    #[test]
    fn builds_and_releases_stage_objects() {
        let gl = FakeGl::default();
        let program = program(&gl);

        assert_eq!(gl.live_shaders(), 0);
        assert!(gl.is_live_program(program.id()));
        assert!(gl.calls().contains(&Call::Link(program.id())));
    }

    #[test]
    fn invalid_vertex_source_reports_vertex_stage_without_linking() {
        let gl = FakeGl::default();
        let err = ShaderProgram::from_glsl(&gl, "#version 330 core\nvoid main( {", FRAGMENT).unwrap_err();

        assert_eq!(err.stage(), Some(ShaderStage::Vertex));
        assert!(err.to_string().starts_with("vertex shader failed to compile"));
        assert!(!gl.calls().iter().any(|c| matches!(c, Call::CreateProgram | Call::Link(_))));
        assert_eq!(gl.live_shaders(), 0);
    }

    #[test]
    fn invalid_fragment_source_releases_vertex_stage() {
        let gl = FakeGl::default();
        let err = ShaderProgram::from_glsl(&gl, VERTEX, "no entry point here").unwrap_err();

        assert_eq!(err.stage(), Some(ShaderStage::Fragment));
        assert_eq!(gl.live_shaders(), 0);
        assert!(!gl.calls().contains(&Call::CreateProgram));
    }

    #[test]
    fn incompatible_stages_fail_to_link() {
        let gl = FakeGl::default();
        let err = ShaderProgram::from_glsl(&gl, VERTEX, MISMATCHED_FRAGMENT).unwrap_err();

        match err {
            ShaderError::Link { log } => assert!(log.contains("TexCoord"), "log: {log}"),
            other => panic!("expected link error, got {other:?}"),
        }
        assert_eq!(gl.live_programs(), 0);
        assert_eq!(gl.live_shaders(), 0);
    }

    #[test]
    fn new_reads_sources_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let vs = dir.path().join("shader.vs");
        let fs = dir.path().join("shader.fs");
        std::fs::write(&vs, VERTEX).unwrap();
        std::fs::write(&fs, FRAGMENT).unwrap();

        let gl = FakeGl::default();
        let program = ShaderProgram::new(&gl, vs.to_str().unwrap(), fs.to_str().unwrap()).unwrap();
        program.set_uniform(&gl, "tint", [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn activate_selects_program() {
        let gl = FakeGl::default();
        let program = program(&gl);
        program.activate(&gl);
        assert_eq!(gl.calls().last(), Some(&Call::UseProgram(Some(program.id()))));
    }

    #[test]
    fn typed_and_arity_setters_upload_values() {
        let gl = FakeGl::default();
        let program = program(&gl);

        program.set_uniform(&gl, "model", Mat4::from_translation(Vec3::X));
        program.set_floats(&gl, "tint", &[0.0, 0.5, 0.0, 1.0]);
        program.set_ints(&gl, "mode", &[2]);

        assert_eq!(gl.uniform("model"), Some(UniformValue::Mat4(Mat4::from_translation(Vec3::X))));
        assert_eq!(gl.uniform("tint"), UniformValue::from_floats(&[0.0, 0.5, 0.0, 1.0]));
        assert_eq!(gl.uniform("mode"), Some(UniformValue::Int(2)));
    }

    #[test]
    fn matrix_setter_dispatches_on_length() {
        let gl = FakeGl::default();
        let program = program(&gl);
        program.set_matrix(&gl, "model", &Mat4::IDENTITY.to_cols_array());
        assert_eq!(gl.uniform("model"), Some(UniformValue::Mat4(Mat4::IDENTITY)));
    }

    #[test]
    #[should_panic(expected = "uniform `missing`")]
    fn missing_uniform_panics_by_default() {
        let gl = FakeGl::default();
        program(&gl).set_uniform(&gl, "missing", 1.0);
    }

    #[test]
    fn missing_uniform_can_be_ignored() {
        let gl = FakeGl::default();
        let program = program(&gl).with_missing_uniform(MissingUniform::Ignore);
        program.set_uniform(&gl, "missing", 1.0);
        assert_eq!(gl.uniform("missing"), None);
    }

    #[test]
    #[should_panic(expected = "expected 1 to 4")]
    fn five_floats_panic() {
        let gl = FakeGl::default();
        program(&gl).set_floats(&gl, "tint", &[1.0; 5]);
    }

    #[test]
    #[should_panic(expected = "expected 1 to 4")]
    fn empty_ints_panic() {
        let gl = FakeGl::default();
        program(&gl).set_ints(&gl, "mode", &[]);
    }

    #[test]
    #[should_panic(expected = "expected 4, 9 or 16")]
    fn odd_matrix_size_panics() {
        let gl = FakeGl::default();
        program(&gl).set_matrix(&gl, "model", &[0.0; 12]);
    }

    #[test]
    fn release_deletes_program() {
        let gl = FakeGl::default();
        let program = program(&gl);
        let id = program.id();
        program.release(&gl);
        assert!(!gl.is_live_program(id));
    }

    #[test]
    fn log_padding_is_trimmed() {
        assert_eq!(clean_log("0:1(1): error\n\0\0".into()), "0:1(1): error");
    }
}
