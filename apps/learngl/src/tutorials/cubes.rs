//! Textured cubes under model/view/projection transforms.

use super::clear;
use super::geometry::{CUBE, CUBE_POSITIONS};
use crate::scene::{Frame, Program, Scene, SceneContext};
use glam::{Mat4, Vec3};
use learngl_render_gl::{Mesh, Texture2D, VertexLayout};

/// How the cubes are placed and viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeLayout {
    /// One cube spinning in front of a fixed view.
    Spinning,
    /// Ten cubes at fixed angles in front of a fixed view.
    Scattered,
    /// Ten cubes seen through the fly camera.
    Camera,
}

pub struct TexturedCubes {
    layout: CubeLayout,
    program: Program,
    mesh: Mesh,
    container: Texture2D,
    face: Texture2D,
}

impl TexturedCubes {
    pub fn new(ctx: &SceneContext, layout: CubeLayout) -> anyhow::Result<Self> {
        let program = ctx.program("textured_cube.vs", "textured_cube.fs")?;
        let mesh = Mesh::new(ctx.gl, &CUBE, &VertexLayout::new(&[3, 2]))?;
        let container = ctx.texture("container.jpg", false)?;
        let face = ctx.texture("awesomeface.png", true)?;

        program.activate(ctx.gl);
        program.set_ints(ctx.gl, "texture1", &[0]);
        program.set_ints(ctx.gl, "texture2", &[1]);

        Ok(Self {
            layout,
            program,
            mesh,
            container,
            face,
        })
    }

    fn view_projection(&self, frame: &Frame) -> (Mat4, Mat4) {
        match self.layout {
            CubeLayout::Camera => (frame.camera.view_matrix(), frame.camera.projection_matrix(frame.aspect)),
            CubeLayout::Spinning | CubeLayout::Scattered => fixed_view_projection(frame.aspect),
        }
    }
}

/// View three units back from the origin through a 45 degree lens.
pub fn fixed_view_projection(aspect: f32) -> (Mat4, Mat4) {
    (
        Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0)),
        Mat4::perspective_rh_gl(45f32.to_radians(), aspect, 0.1, 100.0),
    )
}

/// Model matrix for the `i`th scattered cube at `time` seconds. Every third
/// cube spins at 25 degrees per second, the rest keep a fixed tilt.
pub fn scattered_model(i: usize, time: f32) -> Mat4 {
    let degrees = if i % 3 == 0 { time * 25.0 } else { 20.0 * i as f32 };
    let angle = degrees.to_radians();
    Mat4::from_translation(CUBE_POSITIONS[i]) * Mat4::from_axis_angle(Vec3::new(1.0, 0.3, 0.5).normalize(), angle)
}

impl Scene for TexturedCubes {
    fn render(&mut self, gl: &glow::Context, frame: &Frame) {
        clear(gl, [0.2, 0.3, 0.3, 1.0], true);
        self.container.bind(gl, 0);
        self.face.bind(gl, 1);

        let (view, projection) = self.view_projection(frame);
        self.program.activate(gl);
        self.program.set_uniform(gl, "view", view);
        self.program.set_uniform(gl, "projection", projection);

        match self.layout {
            CubeLayout::Spinning => {
                let axis = Vec3::new(0.5, 1.0, 0.0).normalize();
                let model = Mat4::from_axis_angle(axis, frame.time * 50f32.to_radians());
                self.program.set_uniform(gl, "model", model);
                self.mesh.draw(gl);
            }
            CubeLayout::Scattered | CubeLayout::Camera => {
                for i in 0..CUBE_POSITIONS.len() {
                    self.program.set_uniform(gl, "model", scattered_model(i, frame.time));
                    self.mesh.draw(gl);
                }
            }
        }
    }

    fn destroy(self: Box<Self>, gl: &glow::Context) {
        let this = *self;
        this.mesh.destroy(gl);
        this.container.destroy(gl);
        this.face.destroy(gl);
        this.program.release(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_scattered_cube_starts_unrotated() {
        assert!(scattered_model(0, 0.0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
        assert!(!scattered_model(0, 1.0).abs_diff_eq(Mat4::IDENTITY, 1e-3));
    }

    #[test]
    fn only_every_third_cube_spins() {
        assert_eq!(scattered_model(1, 0.0), scattered_model(1, 5.0));
        assert_ne!(scattered_model(3, 0.0), scattered_model(3, 5.0));
    }

    #[test]
    fn scattered_cubes_follow_positions_table() {
        for (i, pos) in CUBE_POSITIONS.iter().enumerate() {
            let origin = scattered_model(i, 2.0).transform_point3(Vec3::ZERO);
            assert!(origin.abs_diff_eq(*pos, 1e-5), "cube {i}");
        }
    }
}
