use anyhow::{bail, Context, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

use crate::constants::placeholder::MARGIN_DIVISOR;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Fails when the `image` crate was built without PNG decode or encode support.
pub fn ensure_png_support() -> Result<()> {
    let format = ImageFormat::Png;
    if !format.reading_enabled() || !format.writing_enabled() {
        bail!(
            "PNG support is not available in this build.\n\
             Rebuild with the `png` feature of the `image` crate enabled:\n\
             image = {{ version = \"0.25\", features = [\"png\"] }}"
        );
    }
    Ok(())
}

/// Recolour `source` to white, keeping its alpha channel untouched.
///
/// Partial transparency is carried through as-is, so anti-aliased edges
/// of the launcher icon survive.
pub fn derive_silhouette(source: &RgbaImage) -> RgbaImage {
    RgbaImage::from_fn(source.width(), source.height(), |x, y| {
        let alpha = source.get_pixel(x, y)[3];
        Rgba([255, 255, 255, alpha])
    })
}

/// Placeholder icon: a white ellipse inset by `size / 6` on a transparent square.
pub fn synthesize_placeholder(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    let margin = size / MARGIN_DIVISOR;
    draw_filled_ellipse(&mut img, margin, margin, size - margin, size - margin, WHITE);
    img
}

/// Fill the ellipse inscribed in the inclusive box `[x0, x1] x [y0, y1]`,
/// clipped to the image. A pixel is painted when its centre falls inside.
fn draw_filled_ellipse(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    if x1 < x0 || y1 < y0 || img.width() == 0 || img.height() == 0 {
        return;
    }

    let cx = (x0 + x1 + 1) as f64 / 2.0;
    let cy = (y0 + y1 + 1) as f64 / 2.0;
    let rx = (x1 - x0 + 1) as f64 / 2.0;
    let ry = (y1 - y0 + 1) as f64 / 2.0;

    for py in y0..=y1.min(img.height() - 1) {
        for px in x0..=x1.min(img.width() - 1) {
            let dx = (px as f64 + 0.5 - cx) / rx;
            let dy = (py as f64 + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Resample a silhouette to `size x size` with Lanczos3.
pub fn resize_square(silhouette: &RgbaImage, size: u32) -> RgbaImage {
    let mut resized = imageops::resize(silhouette, size, size, FilterType::Lanczos3);

    // Kernel rounding can nudge colour channels off 255
    for pixel in resized.pixels_mut() {
        pixel[0] = 255;
        pixel[1] = 255;
        pixel[2] = 255;
    }

    resized
}

/// Encode as PNG at `path`, replacing whatever is there.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG {}", path.display()))
}
