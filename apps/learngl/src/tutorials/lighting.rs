//! Lighting chapter opener: an object lit by a flat light color, and a
//! small white cube marking the lamp.

use super::clear;
use super::geometry::CUBE;
use crate::scene::{Frame, Program, Scene, SceneContext};
use glam::{Mat4, Vec3};
use learngl_render_gl::{Mesh, VertexLayout};

pub const LIGHT_POS: Vec3 = Vec3::new(1.2, 1.0, 2.0);
pub const OBJECT_COLOR: Vec3 = Vec3::new(1.0, 0.5, 0.31);
pub const LIGHT_COLOR: Vec3 = Vec3::ONE;

pub struct Colors {
    lit: Program,
    lamp: Program,
    cube: Mesh,
}

impl Colors {
    pub fn new(ctx: &SceneContext) -> anyhow::Result<Self> {
        let lit = ctx.program("colors.vs", "colors.fs")?;
        let lamp = ctx.program("colors.vs", "light_cube.fs")?;
        // Texture coordinates are present in the buffer but unused here.
        let cube = Mesh::new(ctx.gl, &CUBE, &VertexLayout::new(&[3, 2]))?;
        Ok(Self { lit, lamp, cube })
    }
}

pub fn lamp_model() -> Mat4 {
    Mat4::from_translation(LIGHT_POS) * Mat4::from_scale(Vec3::splat(0.2))
}

impl Scene for Colors {
    fn render(&mut self, gl: &glow::Context, frame: &Frame) {
        clear(gl, [0.2, 0.3, 0.3, 1.0], true);
        let view = frame.camera.view_matrix();
        let projection = frame.camera.projection_matrix(frame.aspect);

        self.lit.activate(gl);
        self.lit.set_uniform(gl, "objectColor", OBJECT_COLOR);
        self.lit.set_uniform(gl, "lightColor", LIGHT_COLOR);
        self.lit.set_uniform(gl, "view", view);
        self.lit.set_uniform(gl, "projection", projection);
        self.lit.set_uniform(gl, "model", Mat4::IDENTITY);
        self.cube.draw(gl);

        self.lamp.activate(gl);
        self.lamp.set_uniform(gl, "view", view);
        self.lamp.set_uniform(gl, "projection", projection);
        self.lamp.set_uniform(gl, "model", lamp_model());
        self.cube.draw(gl);
    }

    fn destroy(self: Box<Self>, gl: &glow::Context) {
        let this = *self;
        this.cube.destroy(gl);
        this.lit.release(gl);
        this.lamp.release(gl);
    }
}
