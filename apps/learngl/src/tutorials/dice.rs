//! The scattered cubes drawn as dice, one image per face.

use super::clear;
use super::cubes::{fixed_view_projection, scattered_model};
use super::geometry::{dice_cube, face_range, CUBE, CUBE_POSITIONS};
use crate::scene::{Frame, Program, Scene, SceneContext};
use anyhow::Context;
use learngl_render_gl::{Mesh, Texture2D, TextureArray, VertexLayout};
use std::path::PathBuf;

pub const DICE_FACES: usize = 6;

/// File name of the image for `face` (zero based).
pub fn face_file(face: usize) -> String {
    format!("dice-{}.png", face + 1)
}

/// Six textures, rebound before each face's draw.
pub struct DiceFaces {
    program: Program,
    mesh: Mesh,
    faces: Vec<Texture2D>,
}

impl DiceFaces {
    pub fn new(ctx: &SceneContext) -> anyhow::Result<Self> {
        let program = ctx.program("textured_cube.vs", "dice_face.fs")?;
        let mesh = Mesh::new(ctx.gl, &CUBE, &VertexLayout::new(&[3, 2]))?;
        let faces = (0..DICE_FACES)
            .map(|face| ctx.texture(&face_file(face), false))
            .collect::<anyhow::Result<Vec<_>>>()?;

        program.activate(ctx.gl);
        program.set_ints(ctx.gl, "face", &[0]);
        Ok(Self { program, mesh, faces })
    }
}

impl Scene for DiceFaces {
    fn render(&mut self, gl: &glow::Context, frame: &Frame) {
        clear(gl, [0.2, 0.3, 0.3, 1.0], true);
        let (view, projection) = fixed_view_projection(frame.aspect);
        self.program.activate(gl);
        self.program.set_uniform(gl, "view", view);
        self.program.set_uniform(gl, "projection", projection);

        for i in 0..CUBE_POSITIONS.len() {
            self.program.set_uniform(gl, "model", scattered_model(i, frame.time));
            for (face, texture) in self.faces.iter().enumerate() {
                texture.bind(gl, 0);
                let (first, count) = face_range(face);
                self.mesh.draw_range(gl, first, count);
            }
        }
    }

    fn destroy(self: Box<Self>, gl: &glow::Context) {
        let this = *self;
        this.mesh.destroy(gl);
        for texture in this.faces {
            texture.destroy(gl);
        }
        this.program.release(gl);
    }
}

/// One array texture; the face index attribute picks the layer.
pub struct DiceArray {
    program: Program,
    mesh: Mesh,
    dice: TextureArray,
}

impl DiceArray {
    pub fn new(ctx: &SceneContext) -> anyhow::Result<Self> {
        let program = ctx.program("dice_array.vs", "dice_array.fs")?;
        let mesh = Mesh::new(ctx.gl, &dice_cube(), &VertexLayout::new(&[3, 2, 1]))?;
        let paths: Vec<PathBuf> = (0..DICE_FACES).map(|face| ctx.settings.assets.join(face_file(face))).collect();
        let dice = TextureArray::load_or_checker(ctx.gl, &paths, false).context("uploading dice texture array")?;

        program.activate(ctx.gl);
        program.set_ints(ctx.gl, "diceTex", &[0]);
        Ok(Self { program, mesh, dice })
    }
}

impl Scene for DiceArray {
    fn render(&mut self, gl: &glow::Context, frame: &Frame) {
        clear(gl, [0.2, 0.3, 0.3, 1.0], true);
        self.dice.bind(gl, 0);
        let (view, projection) = fixed_view_projection(frame.aspect);
        self.program.activate(gl);
        self.program.set_uniform(gl, "view", view);
        self.program.set_uniform(gl, "projection", projection);

        for i in 0..CUBE_POSITIONS.len() {
            self.program.set_uniform(gl, "model", scattered_model(i, frame.time));
            self.mesh.draw(gl);
        }
    }

    fn destroy(self: Box<Self>, gl: &glow::Context) {
        let this = *self;
        this.mesh.destroy(gl);
        this.dice.destroy(gl);
        this.program.release(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_files_are_numbered_from_one() {
        let files: Vec<_> = (0..DICE_FACES).map(face_file).collect();
        assert_eq!(files.first().map(String::as_str), Some("dice-1.png"));
        assert_eq!(files.last().map(String::as_str), Some("dice-6.png"));
    }

    #[test]
    fn one_face_range_per_texture() {
        let (first, count) = face_range(DICE_FACES - 1);
        assert_eq!((first + count) as usize * 6, dice_cube().len());
    }
}
