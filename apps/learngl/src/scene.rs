use crate::settings::Settings;
use crate::shaders;
use anyhow::Context;
use learngl_camera::Camera;
use learngl_render_gl::Texture2D;
use learngl_shader::ShaderProgram;

pub type Program = ShaderProgram<glow::Context>;

/// Per-frame inputs handed to [`Scene::render`].
pub struct Frame<'a> {
    /// Seconds since the scene started.
    pub time: f32,
    pub aspect: f32,
    pub camera: &'a Camera,
}

/// One tutorial's GPU resources and draw logic.
pub trait Scene {
    fn render(&mut self, gl: &glow::Context, frame: &Frame);

    /// Release every GPU object. Runs once, while the context is current.
    fn destroy(self: Box<Self>, gl: &glow::Context);
}

/// Resource loading helpers available while a scene is built.
pub struct SceneContext<'a> {
    pub gl: &'a glow::Context,
    pub settings: &'a Settings,
}

impl SceneContext<'_> {
    /// Compile and link a program from two named shaders.
    pub fn program(&self, vertex: &str, fragment: &str) -> anyhow::Result<Program> {
        let dir = self.settings.shader_dir.as_deref();
        let vs = shaders::source(vertex, dir)?;
        let fs = shaders::source(fragment, dir)?;
        ShaderProgram::new(self.gl, &vs, &fs).with_context(|| format!("building program {vertex} + {fragment}"))
    }

    /// Upload a texture from the asset directory.
    pub fn texture(&self, file: &str, rgba: bool) -> anyhow::Result<Texture2D> {
        let path = self.settings.assets.join(file);
        Texture2D::load_or_checker(self.gl, &path, rgba).with_context(|| format!("uploading texture {}", path.display()))
    }
}
