//! Shaders chapter: uniforms driven by time, per-vertex color interpolation.

use super::clear;
use super::geometry::{COLORED_TRIANGLE, TRIANGLE};
use crate::scene::{Frame, Program, Scene, SceneContext};
use learngl_render_gl::{Mesh, VertexLayout};

/// Triangle whose green channel pulses with `sin(time)`.
pub struct PulsingTriangle {
    program: Program,
    mesh: Mesh,
}

impl PulsingTriangle {
    pub fn new(ctx: &SceneContext) -> anyhow::Result<Self> {
        let program = ctx.program("hello_triangle.vs", "shaders_uniform.fs")?;
        let mesh = Mesh::new(ctx.gl, &TRIANGLE, &VertexLayout::new(&[3]))?;
        Ok(Self { program, mesh })
    }
}

impl Scene for PulsingTriangle {
    fn render(&mut self, gl: &glow::Context, frame: &Frame) {
        clear(gl, [0.2, 0.3, 0.3, 1.0], false);
        let green = frame.time.sin() / 2.0 + 0.5;
        self.program.activate(gl);
        self.program.set_floats(gl, "ourColor", &[0.0, green, 0.0, 1.0]);
        self.mesh.draw(gl);
    }

    fn destroy(self: Box<Self>, gl: &glow::Context) {
        self.mesh.destroy(gl);
        self.program.release(gl);
    }
}

/// Vertex colors interpolated across the triangle, with the triangle
/// orbiting and its colors shifting over time.
pub struct InterpolatedTriangle {
    program: Program,
    mesh: Mesh,
}

impl InterpolatedTriangle {
    pub fn new(ctx: &SceneContext) -> anyhow::Result<Self> {
        let program = ctx.program("shaders_interpolation.vs", "shaders_interpolation.fs")?;
        let mesh = Mesh::new(ctx.gl, &COLORED_TRIANGLE, &VertexLayout::new(&[3, 3]))?;
        Ok(Self { program, mesh })
    }
}

impl Scene for InterpolatedTriangle {
    fn render(&mut self, gl: &glow::Context, frame: &Frame) {
        clear(gl, [0.2, 0.3, 0.3, 1.0], false);
        let (s, c) = frame.time.sin_cos();
        self.program.activate(gl);
        self.program.set_floats(gl, "offset", &[0.5 * s, -0.5 * c]);
        self.program.set_floats(gl, "colorShift", &[0.5 * s, 0.5 * c, 0.5 * s * c]);
        self.mesh.draw(gl);
    }

    fn destroy(self: Box<Self>, gl: &glow::Context) {
        self.mesh.destroy(gl);
        self.program.release(gl);
    }
}
