use crate::error::GlError;
use crate::image_data::ImageData;
use glow::HasContext;
use std::path::Path;

/// A mipmapped 2D texture with repeat wrapping and linear filtering.
#[derive(Debug)]
pub struct Texture2D {
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture2D {
    pub fn from_image(gl: &glow::Context, image: &ImageData) -> Result<Self, GlError> {
        let format = image.gl_format();
        unsafe {
            let id = gl.create_texture().map_err(|reason| GlError::Create {
                object: "texture",
                reason,
            })?;
            gl.bind_texture(glow::TEXTURE_2D, Some(id));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR_MIPMAP_LINEAR as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
            // RGB rows are not 4-byte aligned for odd widths.
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                format as i32,
                image.width() as i32,
                image.height() as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(image.pixels())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                id,
                width: image.width(),
                height: image.height(),
            })
        }
    }

    /// Load `path`, or upload a checkerboard when the file cannot be decoded.
    pub fn load_or_checker(gl: &glow::Context, path: impl AsRef<Path>, rgba: bool) -> Result<Self, GlError> {
        let path = path.as_ref();
        let image = match ImageData::load(path, rgba) {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(path = %path.display(), "texture unavailable ({e}), using checkerboard");
                ImageData::checkerboard(256, 8, rgba)
            }
        };
        Self::from_image(gl, &image)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bind to texture unit `unit` (0 for `GL_TEXTURE0`).
    pub fn bind(&self, gl: &glow::Context, unit: u32) {
        unsafe {
            gl.active_texture(glow::TEXTURE0 + unit);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }

    pub fn destroy(self, gl: &glow::Context) {
        unsafe { gl.delete_texture(self.id) }
    }
}

/// A `TEXTURE_2D_ARRAY` with one equally sized layer per image, clamped at the
/// edges and linearly filtered.
#[derive(Debug)]
pub struct TextureArray {
    id: glow::Texture,
    layers: u32,
}

impl TextureArray {
    pub fn from_layers(gl: &glow::Context, layers: &[ImageData]) -> Result<Self, GlError> {
        let (width, height, channels) = layer_extent(layers)?;
        let format = layers[0].gl_format();
        let internal = if channels == 4 { glow::RGBA8 } else { glow::RGB8 };
        let depth = layers.len() as i32;

        unsafe {
            let id = gl.create_texture().map_err(|reason| GlError::Create {
                object: "texture array",
                reason,
            })?;
            gl.bind_texture(glow::TEXTURE_2D_ARRAY, Some(id));
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_3d(
                glow::TEXTURE_2D_ARRAY,
                0,
                internal as i32,
                width as i32,
                height as i32,
                depth,
                0,
                format,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(None),
            );
            for (layer, image) in layers.iter().enumerate() {
                gl.tex_sub_image_3d(
                    glow::TEXTURE_2D_ARRAY,
                    0,
                    0,
                    0,
                    layer as i32,
                    width as i32,
                    height as i32,
                    1,
                    format,
                    glow::UNSIGNED_BYTE,
                    glow::PixelUnpackData::Slice(Some(image.pixels())),
                );
            }
            gl.tex_parameter_i32(glow::TEXTURE_2D_ARRAY, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D_ARRAY, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D_ARRAY, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D_ARRAY, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);
            gl.bind_texture(glow::TEXTURE_2D_ARRAY, None);

            tracing::debug!(width, height, layers = depth, "texture array uploaded");
            Ok(Self {
                id,
                layers: layers.len() as u32,
            })
        }
    }

    /// Load one layer per path; undecodable files become checkerboard layers.
    pub fn load_or_checker<P: AsRef<Path>>(gl: &glow::Context, paths: &[P], rgba: bool) -> Result<Self, GlError> {
        let layers = ImageData::load_layers(paths, rgba)?;
        Self::from_layers(gl, &layers)
    }

    pub fn layers(&self) -> u32 {
        self.layers
    }

    pub fn bind(&self, gl: &glow::Context, unit: u32) {
        unsafe {
            gl.active_texture(glow::TEXTURE0 + unit);
            gl.bind_texture(glow::TEXTURE_2D_ARRAY, Some(self.id));
        }
    }

    pub fn destroy(self, gl: &glow::Context) {
        unsafe { gl.delete_texture(self.id) }
    }
}

/// Shared `(width, height, channels)` of a non-empty layer list.
fn layer_extent(layers: &[ImageData]) -> Result<(u32, u32, u8), GlError> {
    let first = layers.first().ok_or_else(|| GlError::Create {
        object: "texture array",
        reason: "no layers".into(),
    })?;
    let expected = (first.width(), first.height());
    for (layer, image) in layers.iter().enumerate().skip(1) {
        let actual = (image.width(), image.height());
        if actual != expected {
            return Err(GlError::LayerSize { layer, expected, actual });
        }
        if image.channels() != first.channels() {
            return Err(GlError::Channels(image.channels()));
        }
    }
    Ok((expected.0, expected.1, first.channels()))
}
