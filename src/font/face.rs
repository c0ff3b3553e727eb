//! FreeType face loading and single-glyph rasterization
//!
//! Renders in the mode the owning `FtLibrary` ended up with, so a probe
//! shows whether subpixel rendering is really in effect.

use freetype::face::LoadFlag;
use freetype::render_mode::RenderMode;
use log::{info, warn};
use std::path::Path;
use std::rc::Rc;

use super::library::{FtLibrary, HintingMode, LcdMode};
use crate::constants::MAX_GLYPH_DIMENSION;
use crate::errors::FtError;

/// FreeType rasterization result
#[derive(Debug, Clone, PartialEq)]
pub struct FtGlyph {
    /// Bitmap data (grayscale: 1byte/pixel, LCD: 3bytes/pixel)
    pub bitmap: Vec<u8>,
    /// Bitmap width (pixels)
    pub width: u32,
    /// Bitmap height (pixels)
    pub height: u32,
    /// Horizontal offset from baseline
    pub bearing_x: i32,
    /// Vertical offset from baseline
    pub bearing_y: i32,
    /// Horizontal advance to next character (26.6 fixed point -> pixels)
    pub advance: f32,
}

impl FtGlyph {
    pub fn bytes_per_pixel(&self) -> usize {
        if self.width == 0 || self.height == 0 {
            return 0;
        }
        self.bitmap.len() / (self.width as usize * self.height as usize)
    }
}

/// Pixel dimensions of a rendered bitmap
/// (LCD bitmaps are 3x wider or 3x taller than the glyph)
pub fn glyph_dimensions(mode: LcdMode, raw_width: u32, raw_height: u32) -> (u32, u32) {
    match mode {
        LcdMode::Grayscale => (raw_width, raw_height),
        LcdMode::LcdHorizontal => (raw_width / 3, raw_height),
        LcdMode::LcdVertical => (raw_width, raw_height / 3),
    }
}

/// Copy a FreeType bitmap into a tightly packed buffer
///
/// `pitch` is the absolute row stride of `buffer` in bytes.
/// With `bgr`, LCD samples are written as R,G,B from a B,G,R panel order.
pub fn copy_bitmap(
    mode: LcdMode,
    buffer: &[u8],
    pitch: usize,
    width: u32,
    height: u32,
    bgr: bool,
) -> Vec<u8> {
    let (width, height) = (width as usize, height as usize);
    match mode {
        LcdMode::Grayscale => {
            // R8 format
            let mut data = Vec::with_capacity(width * height);
            for y in 0..height {
                data.extend_from_slice(&buffer[y * pitch..y * pitch + width]);
            }
            data
        }
        LcdMode::LcdHorizontal => {
            // RGB format (1 pixel = 3 bytes)
            let mut data = Vec::with_capacity(width * height * 3);
            for y in 0..height {
                for x in 0..width {
                    let idx = y * pitch + x * 3;
                    push_rgb(&mut data, buffer[idx], buffer[idx + 1], buffer[idx + 2], bgr);
                }
            }
            data
        }
        LcdMode::LcdVertical => {
            let mut data = Vec::with_capacity(width * height * 3);
            for y in 0..height {
                let y3 = y * 3;
                for x in 0..width {
                    push_rgb(
                        &mut data,
                        buffer[y3 * pitch + x],
                        buffer[(y3 + 1) * pitch + x],
                        buffer[(y3 + 2) * pitch + x],
                        bgr,
                    );
                }
            }
            data
        }
    }
}

fn push_rgb(data: &mut Vec<u8>, a: u8, g: u8, b: u8, bgr: bool) {
    if bgr {
        data.extend_from_slice(&[b, g, a]);
    } else {
        data.extend_from_slice(&[a, g, b]);
    }
}

/// FreeType font face
pub struct FtFace {
    face: freetype::Face,
    /// Current font size (pixels)
    size_px: u32,
    lcd_mode: LcdMode,
    bgr: bool,
    hinting_mode: HintingMode,
}

impl FtFace {
    /// Load from a font file
    pub fn from_file(library: &FtLibrary, path: &Path, size_px: u32) -> Result<Self, FtError> {
        let data = std::fs::read(path)?;
        info!("Font file read: {} ({} bytes)", path.display(), data.len());
        Self::from_bytes(library, data, size_px)
    }

    /// Load from font data
    pub fn from_bytes(library: &FtLibrary, data: Vec<u8>, size_px: u32) -> Result<Self, FtError> {
        // freetype-rs requires Rc<Vec<u8>>
        let face = library.inner().new_memory_face(Rc::new(data), 0)?;
        face.set_pixel_sizes(0, size_px)?;

        let face = Self {
            face,
            size_px,
            lcd_mode: library.lcd_mode(),
            bgr: library.is_bgr(),
            hinting_mode: library.hinting(),
        };
        info!(
            "FreeType font loaded: {} ({}px, {:?}, hinting={:?})",
            face.family_name(),
            size_px,
            face.lcd_mode,
            face.hinting_mode
        );
        Ok(face)
    }

    pub fn family_name(&self) -> String {
        self.face
            .family_name()
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Change font size
    pub fn set_size(&mut self, size_px: u32) -> Result<(), FtError> {
        self.face.set_pixel_sizes(0, size_px)?;
        self.size_px = size_px;
        Ok(())
    }

    /// Get glyph ID for character (None if the font lacks it)
    pub fn glyph_index(&self, ch: char) -> Option<u32> {
        self.face
            .get_char_index(ch as usize)
            .filter(|&index| index != 0)
    }

    /// Rasterize character
    pub fn rasterize(&self, ch: char) -> Result<FtGlyph, FtError> {
        if self.glyph_index(ch).is_none() {
            return Err(FtError::MissingGlyph(ch));
        }

        let load_flags = LoadFlag::DEFAULT | self.hinting_mode.to_load_flag(self.lcd_mode);
        self.face.load_char(ch as usize, load_flags)?;

        let glyph = self.face.glyph();
        let render_mode = match self.lcd_mode {
            LcdMode::Grayscale => RenderMode::Normal,
            LcdMode::LcdHorizontal => RenderMode::Lcd,
            LcdMode::LcdVertical => RenderMode::LcdV,
        };
        glyph.render_glyph(render_mode)?;

        let bitmap = glyph.bitmap();
        let metrics = glyph.metrics();
        let bearing_x = (metrics.horiBearingX >> 6) as i32;
        let bearing_y = (metrics.horiBearingY >> 6) as i32;
        let advance = (metrics.horiAdvance >> 6) as f32;

        let (width, height) =
            glyph_dimensions(self.lcd_mode, bitmap.width() as u32, bitmap.rows() as u32);

        if width == 0 || height == 0 {
            // Empty glyph (e.g., space)
            return Ok(FtGlyph {
                bitmap: vec![],
                width: 0,
                height: 0,
                bearing_x,
                bearing_y,
                advance,
            });
        }

        if width > MAX_GLYPH_DIMENSION || height > MAX_GLYPH_DIMENSION {
            warn!("FreeType: glyph too large ({}x{}), skipping", width, height);
            return Err(FtError::GlyphTooLarge { width, height });
        }

        let pitch = bitmap.pitch().unsigned_abs() as usize;
        let data = copy_bitmap(self.lcd_mode, bitmap.buffer(), pitch, width, height, self.bgr);

        Ok(FtGlyph {
            bitmap: data,
            width,
            height,
            bearing_x,
            bearing_y,
            advance,
        })
    }

    /// Line metrics (ascender, descender, height) in pixels
    pub fn line_metrics(&self) -> Option<(f32, f32, f32)> {
        let size_metrics = self.face.size_metrics()?;
        let ascender = (size_metrics.ascender >> 6) as f32;
        let descender = (size_metrics.descender >> 6) as f32;
        let height = (size_metrics.height >> 6) as f32;
        Some((ascender, descender, height))
    }

    pub fn size(&self) -> u32 {
        self.size_px
    }

    pub fn lcd_mode(&self) -> LcdMode {
        self.lcd_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_dimensions() {
        assert_eq!(glyph_dimensions(LcdMode::Grayscale, 10, 12), (10, 12));
        assert_eq!(glyph_dimensions(LcdMode::LcdHorizontal, 30, 12), (10, 12));
        assert_eq!(glyph_dimensions(LcdMode::LcdVertical, 10, 36), (10, 12));
        assert_eq!(glyph_dimensions(LcdMode::LcdHorizontal, 2, 5), (0, 5));
    }

    #[test]
    fn test_copy_grayscale_skips_padding() {
        // 2x2 glyph, pitch 4 (2 padding bytes per row)
        let buffer = [1, 2, 0xEE, 0xEE, 3, 4, 0xEE, 0xEE];
        assert_eq!(copy_bitmap(LcdMode::Grayscale, &buffer, 4, 2, 2, false), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_copy_lcd_horizontal() {
        // 2x1 glyph, 6 subpixel bytes + 2 padding
        let buffer = [10, 20, 30, 40, 50, 60, 0, 0];
        assert_eq!(
            copy_bitmap(LcdMode::LcdHorizontal, &buffer, 8, 2, 1, false),
            vec![10, 20, 30, 40, 50, 60]
        );
        assert_eq!(
            copy_bitmap(LcdMode::LcdHorizontal, &buffer, 8, 2, 1, true),
            vec![30, 20, 10, 60, 50, 40]
        );
    }

    #[test]
    fn test_copy_lcd_vertical() {
        // 1x1 glyph stored as 3 rows
        let buffer = [7, 0, 8, 0, 9, 0];
        assert_eq!(
            copy_bitmap(LcdMode::LcdVertical, &buffer, 2, 1, 1, false),
            vec![7, 8, 9]
        );
    }

    #[test]
    fn test_bytes_per_pixel() {
        let glyph = FtGlyph {
            bitmap: vec![0; 2 * 3 * 3],
            width: 2,
            height: 3,
            bearing_x: 0,
            bearing_y: 0,
            advance: 2.0,
        };
        assert_eq!(glyph.bytes_per_pixel(), 3);
        let empty = FtGlyph { bitmap: vec![], width: 0, height: 0, ..glyph };
        assert_eq!(empty.bytes_per_pixel(), 0);
    }

    #[test]
    fn test_garbage_font_data_is_rejected() {
        let config = crate::config::FreetypeConfig::default();
        let library = FtLibrary::init(&config).unwrap();
        assert!(FtFace::from_bytes(&library, b"not a font".to_vec(), 16).is_err());
    }
}
