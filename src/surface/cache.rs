//! Offscreen raster buffer holding every committed stroke.

use crate::draw::{self, Color, PaintStyle, StrokePath};

/// ARGB32 image plus the cairo context bound to it.
///
/// Field order matters: the context is dropped before the surface it targets.
pub struct CachedImage {
    context: cairo::Context,
    surface: cairo::ImageSurface,
}

impl CachedImage {
    /// Allocates a `width × height` image filled with `background`.
    ///
    /// Negative extents are treated as zero; cairo rejects sizes beyond its
    /// own limits, which is reported as an error.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, cairo::Error> {
        let surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width.max(0), height.max(0))?;
        let context = cairo::Context::new(&surface)?;
        draw::fill_background(&context, background)?;
        Ok(Self { context, surface })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// The image, for compositing onto a visible target.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Permanently strokes `path` into the image.
    pub fn commit(&self, path: &StrokePath, paint: &PaintStyle) -> Result<(), cairo::Error> {
        draw::stroke_path(&self.context, path, paint)
    }

    /// Copies the pixels out as premultiplied ARGB32 values, row-major.
    ///
    /// The bound context keeps the image shared, so the pixels are read from
    /// a private copy.
    pub fn pixels(&self) -> Result<Vec<u32>, cairo::Error> {
        let (width, height) = (self.width(), self.height());
        if width == 0 || height == 0 {
            return Ok(Vec::new());
        }

        let mut copy = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        {
            let ctx = cairo::Context::new(&copy)?;
            draw::blit_image(&ctx, &self.surface)?;
        }
        copy.flush();

        let stride = copy.stride() as usize;
        let data = copy
            .data()
            .map_err(|_| cairo::Error::SurfaceFinished)?;
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in data.chunks(stride).take(height as usize) {
            pixels.extend(
                row[..width as usize * 4]
                    .chunks_exact(4)
                    .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]])),
            );
        }
        Ok(pixels)
    }

    /// Counts pixels that differ from `color`.
    pub fn count_pixels_unlike(&self, color: Color) -> Result<usize, cairo::Error> {
        let expected = color.to_premultiplied_argb32();
        Ok(self.pixels()?.into_iter().filter(|px| *px != expected).count())
    }
}
