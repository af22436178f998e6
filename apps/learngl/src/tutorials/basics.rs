//! Getting started: window, triangle, indexed rectangle.

use super::geometry::{RECTANGLE, RECTANGLE_INDICES, TRIANGLE};
use super::clear;
use crate::scene::{Frame, Program, Scene, SceneContext};
use learngl_render_gl::{Mesh, VertexLayout};

/// Clears the window every frame and nothing else.
pub struct HelloWindow;

impl Scene for HelloWindow {
    fn render(&mut self, gl: &glow::Context, _frame: &Frame) {
        clear(gl, [0.2, 0.3, 0.3, 1.0], false);
    }

    fn destroy(self: Box<Self>, _gl: &glow::Context) {}
}

/// A single orange shape drawn from a plain vertex buffer or an index buffer.
pub struct SolidShape {
    program: Program,
    mesh: Mesh,
}

impl SolidShape {
    pub fn triangle(ctx: &SceneContext) -> anyhow::Result<Self> {
        let program = ctx.program("hello_triangle.vs", "hello_triangle.fs")?;
        let mesh = Mesh::new(ctx.gl, &TRIANGLE, &VertexLayout::new(&[3]))?;
        Ok(Self { program, mesh })
    }

    pub fn rectangle(ctx: &SceneContext) -> anyhow::Result<Self> {
        let program = ctx.program("hello_triangle.vs", "hello_triangle.fs")?;
        let mesh = Mesh::indexed(ctx.gl, &RECTANGLE, &RECTANGLE_INDICES, &VertexLayout::new(&[3]))?;
        Ok(Self { program, mesh })
    }
}

impl Scene for SolidShape {
    fn render(&mut self, gl: &glow::Context, _frame: &Frame) {
        clear(gl, [0.2, 0.3, 0.3, 1.0], false);
        self.program.activate(gl);
        self.mesh.draw(gl);
    }

    fn destroy(self: Box<Self>, gl: &glow::Context) {
        self.mesh.destroy(gl);
        self.program.release(gl);
    }
}
