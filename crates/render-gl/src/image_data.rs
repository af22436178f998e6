use crate::error::GlError;
use image::DynamicImage;
use std::path::Path;

/// Edge length of checkerboard layers when no layer image decodes.
const FALLBACK_SIZE: u32 = 256;

/// Decoded 8-bit pixels ready for `glTexImage2D`.
///
/// Rows run bottom-to-top: the decoder's top-left origin is flipped to GL's
/// bottom-left origin on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

impl ImageData {
    /// Wrap already bottom-up pixels. `channels` must be 3 or 4.
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<Self, GlError> {
        if channels != 3 && channels != 4 {
            return Err(GlError::Channels(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if pixels.len() != expected {
            return Err(GlError::ImageSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Decode a PNG/JPEG file as RGB, or RGBA when `rgba` is set.
    pub fn load(path: impl AsRef<Path>, rgba: bool) -> Result<Self, GlError> {
        let path = path.as_ref();
        let img = image::open(path)?;
        tracing::debug!(path = %path.display(), width = img.width(), height = img.height(), "decoded image");
        Ok(Self::from_dynamic(img, rgba))
    }

    pub fn from_dynamic(img: DynamicImage, rgba: bool) -> Self {
        let img = img.flipv();
        let (width, height) = (img.width(), img.height());
        let (channels, pixels) = if rgba {
            (4, img.into_rgba8().into_raw())
        } else {
            (3, img.into_rgb8().into_raw())
        };
        Self {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// Two-tone checkerboard, used when a texture file is missing.
    pub fn checkerboard(size: u32, tiles: u32, rgba: bool) -> Self {
        Self::checker(size, size, (size / tiles.max(1)).max(1), rgba)
    }

    fn checker(width: u32, height: u32, tile: u32, rgba: bool) -> Self {
        let channels: u8 = if rgba { 4 } else { 3 };
        let mut pixels = Vec::with_capacity(width as usize * height as usize * channels as usize);
        for y in 0..height {
            for x in 0..width {
                let shade = if (x / tile + y / tile) % 2 == 0 { 0xE0 } else { 0x40 };
                pixels.extend_from_slice(&[shade, shade, shade]);
                if rgba {
                    pixels.push(0xFF);
                }
            }
        }
        Self {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// Decode one image per array-texture layer.
    ///
    /// Layers that fail to decode become checkerboards sized like the first
    /// decoded layer (256x256 when none decode). Decoded layers must all share
    /// one size.
    pub fn load_layers<P: AsRef<Path>>(paths: &[P], rgba: bool) -> Result<Vec<Self>, GlError> {
        let decoded: Vec<Option<Self>> = paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                match ImageData::load(path, rgba) {
                    Ok(img) => Some(img),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), "layer unavailable ({e}), using checkerboard");
                        None
                    }
                }
            })
            .collect();

        let size = decoded
            .iter()
            .flatten()
            .map(|img| (img.width, img.height))
            .next()
            .unwrap_or((FALLBACK_SIZE, FALLBACK_SIZE));

        decoded
            .into_iter()
            .enumerate()
            .map(|(layer, img)| match img {
                Some(img) if (img.width, img.height) != size => Err(GlError::LayerSize {
                    layer,
                    expected: size,
                    actual: (img.width, img.height),
                }),
                Some(img) => Ok(img),
                None => Ok(Self::checker(size.0, size.1, (size.0.min(size.1) / 8).max(1), rgba)),
            })
            .collect()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// GL pixel format matching the channel count.
    pub fn gl_format(&self) -> u32 {
        if self.channels == 4 { glow::RGBA } else { glow::RGB }
    }
}
