use {
    crate::{
        error::{NoiseError, Result},
        noise::{FractalParams, Simplex},
        utils::wrap_byte,
    },
    glam::DVec2,
    image::{
        ExtendedColorType, ImageEncoder, RgbaImage,
        codecs::png::{CompressionType, FilterType, PngEncoder},
    },
    rayon::prelude::*,
    std::{fs::File, io::BufWriter, path::Path},
};

pub struct TextureParams {
    pub width: u32,
    pub height: u32,
    /// Offset in pixels added before scaling.
    pub origin: DVec2,
    /// Noise units per pixel.
    pub scale: f64,
    pub fractal: FractalParams,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            origin: DVec2::ZERO,
            scale: 0.01,
            fractal: FractalParams::default(),
        }
    }
}

impl TextureParams {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(NoiseError::invalid(
                "size",
                format!("must be non-zero, got {}x{}", self.width, self.height),
            ));
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| {
                NoiseError::invalid(
                    "size",
                    format!("{}x{} does not fit in memory", self.width, self.height),
                )
            })?;
        if !self.scale.is_finite() {
            return Err(NoiseError::invalid(
                "scale",
                format!("must be finite, got {}", self.scale),
            ));
        }
        if !self.origin.is_finite() {
            return Err(NoiseError::invalid(
                "origin",
                format!("must be finite, got {}", self.origin),
            ));
        }
        self.fractal.validate()
    }
}

/// Grayscale noise raster stored as RGBA8, row-major, top row first.
pub struct Texture {
    image: RgbaImage,
}

impl Texture {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Flat `R, G, B, A` bytes, `4 * width * height` long.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }

    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let encoder =
            PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);

        encoder.write_image(
            self.as_bytes(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgba8,
        )?;

        log::info!(
            "wrote {}x{} texture to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}

impl Simplex {
    /// Rasterises fbm noise into a grayscale RGBA texture of the requested
    /// size. Pixel `(x, y)` samples `fbm((x + origin.x) * scale, (y + origin.y) * scale)`.
    pub fn texture(&self, params: &TextureParams) -> Result<Texture> {
        params.validate()?;

        let mut image = RgbaImage::new(params.width, params.height);
        let row_len = params.width as usize * 4;

        image
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                let sample_y = (y as f64 + params.origin.y) * params.scale;
                for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                    let sample_x = (x as f64 + params.origin.x) * params.scale;
                    let value = shade(self.fbm_unchecked(sample_x, sample_y, &params.fractal));
                    pixel.copy_from_slice(&[value, value, value, 255]);
                }
            });

        log::debug!(
            "generated {}x{} texture, {} octaves",
            params.width,
            params.height,
            params.fractal.octaves
        );

        Ok(Texture { image })
    }
}

/// Maps `[-1, 1]` onto `[0, 255]`. Out of range values wrap instead of
/// clamping so rasters stay byte-for-byte reproducible.
fn shade(value: f64) -> u8 {
    wrap_byte((value * 128.0 + 128.0).floor())
}
