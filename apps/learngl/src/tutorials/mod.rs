//! The runnable tutorial programs.

mod basics;
mod cubes;
mod dice;
pub mod geometry;
mod lighting;
mod uniforms;

use crate::scene::{Scene, SceneContext};
use clap::ValueEnum;
use cubes::CubeLayout;
use glow::HasContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tutorial {
    HelloWindow,
    HelloTriangle,
    HelloRectangle,
    ShadersUniform,
    ShadersInterpolation,
    CoordinateSystemsDepth,
    CoordinateSystemsMultiple,
    /// The scattered cubes as dice, one texture per face.
    CoordinateSystemsDiceFaces,
    /// The scattered cubes as dice, sampled from one array texture.
    CoordinateSystemsDiceArray,
    CameraMouseZoom,
    Colors,
}

impl Tutorial {
    /// Whether keyboard, mouse and scroll input drive the camera.
    pub fn uses_camera(self) -> bool {
        matches!(self, Self::CameraMouseZoom | Self::Colors)
    }

    /// Whether the scene draws 3D geometry and needs a depth buffer test.
    pub fn uses_depth(self) -> bool {
        matches!(
            self,
            Self::CoordinateSystemsDepth
                | Self::CoordinateSystemsMultiple
                | Self::CoordinateSystemsDiceFaces
                | Self::CoordinateSystemsDiceArray
                | Self::CameraMouseZoom
                | Self::Colors
        )
    }

    pub fn build(self, ctx: &SceneContext) -> anyhow::Result<Box<dyn Scene>> {
        unsafe {
            if self.uses_depth() {
                ctx.gl.enable(glow::DEPTH_TEST);
            } else {
                ctx.gl.disable(glow::DEPTH_TEST);
            }
        }
        let scene: Box<dyn Scene> = match self {
            Self::HelloWindow => Box::new(basics::HelloWindow),
            Self::HelloTriangle => Box::new(basics::SolidShape::triangle(ctx)?),
            Self::HelloRectangle => Box::new(basics::SolidShape::rectangle(ctx)?),
            Self::ShadersUniform => Box::new(uniforms::PulsingTriangle::new(ctx)?),
            Self::ShadersInterpolation => Box::new(uniforms::InterpolatedTriangle::new(ctx)?),
            Self::CoordinateSystemsDepth => Box::new(cubes::TexturedCubes::new(ctx, CubeLayout::Spinning)?),
            Self::CoordinateSystemsMultiple => Box::new(cubes::TexturedCubes::new(ctx, CubeLayout::Scattered)?),
            Self::CoordinateSystemsDiceFaces => Box::new(dice::DiceFaces::new(ctx)?),
            Self::CoordinateSystemsDiceArray => Box::new(dice::DiceArray::new(ctx)?),
            Self::CameraMouseZoom => Box::new(cubes::TexturedCubes::new(ctx, CubeLayout::Camera)?),
            Self::Colors => Box::new(lighting::Colors::new(ctx)?),
        };
        tracing::info!(tutorial = ?self, "scene ready");
        Ok(scene)
    }
}

/// Clear the color buffer, and the depth buffer when `depth` is set.
pub(crate) fn clear(gl: &glow::Context, [r, g, b, a]: [f32; 4], depth: bool) {
    let mut mask = glow::COLOR_BUFFER_BIT;
    if depth {
        mask |= glow::DEPTH_BUFFER_BIT;
    }
    unsafe {
        gl.clear_color(r, g, b, a);
        gl.clear(mask);
    }
}
