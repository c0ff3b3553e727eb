//! FreeType integration
//!
//! Handles:
//! - FreeType library initialization (freetype-rs)
//! - Subpixel (LCD) filter configuration with grayscale fallback
//! - Face loading and single-glyph rasterization
//! - System font lookup (fontconfig)

pub mod face;
pub mod fontconfig;
pub mod library;

pub use face::{FtFace, FtGlyph};
pub use fontconfig::{resolve_font, FontFinder, FontMatch};
pub use library::{library_error_string, FtLibrary, HintingMode, LcdFilterMode, LcdMode, LcdSubpixel};
