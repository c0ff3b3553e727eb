//! Global constants for ftinit
//!
//! Consolidates rendering limits and install paths
//! to eliminate magic numbers throughout the codebase.

// ============================================================================
// Rendering Constants
// ============================================================================

/// Default probe font size (pixels)
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Minimum font size (pixels)
pub const MIN_FONT_SIZE: u32 = 4;

/// Maximum font size (pixels)
pub const MAX_FONT_SIZE: u32 = 512;

/// Glyph bitmaps larger than this in either dimension are rejected
/// (guards against overflow and OOM from malformed fonts)
pub const MAX_GLYPH_DIMENSION: u32 = 4096;

/// Characters rasterized by `--probe` when none are given
pub const DEFAULT_PROBE_TEXT: &str = "Ag@#W";

// ============================================================================
// Paths
// ============================================================================

/// Usual install locations of FreeType's error-definition header
pub const FTERRDEF_PATHS: &[&str] = &[
    "/usr/include/freetype2/freetype/fterrdef.h",
    "/usr/local/include/freetype2/freetype/fterrdef.h",
    "/opt/homebrew/include/freetype2/freetype/fterrdef.h",
];
