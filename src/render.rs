//! Matrix to pixel mapping
//!
//! Unset modules render light, same as the penalty rules see them.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::encoder::config;
use crate::error::Result;
use crate::models::QrSymbol;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Pixel scale and quiet zone for rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module edge
    pub scale: usize,
    /// Light border width in modules
    pub border: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: config::module_pixels(),
            border: config::quiet_zone(),
        }
    }
}

impl RenderOptions {
    /// Image edge length in pixels for a symbol of `size` modules
    pub fn image_size(&self, size: usize) -> usize {
        (size + 2 * self.border) * self.scale
    }
}

/// Grayscale image, dark = 0 and light = 255
pub fn to_luma_image(symbol: &QrSymbol, options: &RenderOptions) -> GrayImage {
    assert!(options.scale > 0, "scale must be at least one pixel");
    let side = options.image_size(symbol.size()) as u32;
    let scale = options.scale;
    let border = options.border;
    let size = symbol.size();

    GrayImage::from_fn(side, side, |px, py| {
        let mx = (px as usize / scale).checked_sub(border);
        let my = (py as usize / scale).checked_sub(border);
        match (mx, my) {
            (Some(x), Some(y)) if x < size && y < size && symbol.is_dark(x, y) => DARK,
            _ => LIGHT,
        }
    })
}

/// Render and write a PNG (format picked from the extension)
pub fn save_png<P: AsRef<Path>>(symbol: &QrSymbol, path: P, options: &RenderOptions) -> Result<()> {
    to_luma_image(symbol, options).save(path)?;
    Ok(())
}

/// Text rendering, two characters per module, one line per row
pub fn to_ascii(symbol: &QrSymbol, border: usize) -> String {
    let size = symbol.size();
    let side = size + 2 * border;
    let mut out = String::with_capacity(side * (side * 2 + 1));
    for row in 0..side {
        for col in 0..side {
            let dark = row >= border
                && col >= border
                && row - border < size
                && col - border < size
                && symbol.is_dark(col - border, row - border);
            out.push_str(if dark { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{EncodeOptions, encode_payload};

    fn hello() -> QrSymbol {
        encode_payload(b"HELLO", &EncodeOptions::default()).unwrap()
    }

    #[test]
    fn test_luma_dimensions_and_border() {
        let symbol = hello();
        let options = RenderOptions { scale: 3, border: 2 };
        let img = to_luma_image(&symbol, &options);
        assert_eq!(img.dimensions(), (75, 75));
        // Quiet zone is light, finder corner is dark
        assert_eq!(*img.get_pixel(0, 0), LIGHT);
        assert_eq!(*img.get_pixel(5, 5), LIGHT);
        assert_eq!(*img.get_pixel(6, 6), DARK);
        assert_eq!(*img.get_pixel(8, 8), DARK);
    }

    #[test]
    fn test_pixels_follow_modules() {
        let symbol = hello();
        let options = RenderOptions { scale: 2, border: 0 };
        let img = to_luma_image(&symbol, &options);
        for y in 0..symbol.size() {
            for x in 0..symbol.size() {
                let expected = if symbol.is_dark(x, y) { DARK } else { LIGHT };
                assert_eq!(*img.get_pixel(2 * x as u32 + 1, 2 * y as u32 + 1), expected);
            }
        }
    }

    #[test]
    fn test_ascii() {
        let symbol = hello();
        let art = to_ascii(&symbol, 1);
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 23);
        assert!(lines[0].chars().all(|c| c == ' '));
        assert!(lines[1].starts_with("  ██████████████"));
        assert_eq!(lines[1].chars().count(), 46);
    }
}
