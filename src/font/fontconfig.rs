//! fontconfig integration
//!
//! Locate system fonts for the FreeType probe

use anyhow::{anyhow, Result};
use fontconfig::Fontconfig;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Font search result
#[derive(Debug, Clone)]
pub struct FontMatch {
    /// Font file path
    pub path: PathBuf,
    /// Font name
    pub family: String,
}

/// Search fonts using fontconfig
pub struct FontFinder {
    fc: Fontconfig,
}

impl FontFinder {
    /// Initialize FontFinder
    pub fn new() -> Result<Self> {
        let fc = Fontconfig::new().ok_or_else(|| anyhow!("fontconfig initialization failed"))?;
        info!("fontconfig initialized");
        Ok(Self { fc })
    }

    /// Search by font name
    /// fontconfig always returns the "closest" match, so the family name is
    /// checked against the request before accepting it. Generic aliases
    /// resolve to a concrete family and are accepted as is.
    pub fn find_font(&self, family: &str) -> Option<FontMatch> {
        let font = self.fc.find(family, None)?;
        if accept_match(family, &font.name) {
            return Some(FontMatch {
                path: font.path,
                family: font.name,
            });
        }
        warn!(
            "fontconfig: rejected false match for \"{}\": got \"{}\"",
            family, font.name
        );
        None
    }

    /// Search for monospace font
    pub fn find_monospace(&self) -> Option<FontMatch> {
        let fallbacks = [
            "DejaVu Sans Mono",
            "Liberation Mono",
            "Noto Sans Mono",
            "Source Code Pro",
            "Inconsolata",
            "Courier New",
            "monospace",
        ];

        for name in fallbacks {
            if let Some(m) = self.find_font(name) {
                return Some(m);
            }
        }

        warn!("Monospace font not found");
        None
    }
}

fn family_matches(requested: &str, found: &str) -> bool {
    let req = requested.to_ascii_lowercase();
    let got = found.to_ascii_lowercase();
    got.contains(&req) || req.contains(&got)
}

/// fontconfig generic family aliases
fn is_generic_family(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "monospace" | "mono" | "sans-serif" | "sans" | "serif"
    )
}

fn accept_match(requested: &str, found: &str) -> bool {
    is_generic_family(requested) || family_matches(requested, found)
}

/// Resolve a font specifier to a file
///
/// An existing path is used directly, anything else is treated as a family
/// name. An empty specifier picks the first monospace font found.
pub fn resolve_font(specifier: &str) -> Result<FontMatch> {
    let path = Path::new(specifier);
    if !specifier.is_empty() && path.exists() {
        info!("Font from path: {}", specifier);
        return Ok(FontMatch {
            path: path.to_path_buf(),
            family: specifier.to_string(),
        });
    }

    let finder = FontFinder::new()?;
    if specifier.is_empty() {
        return finder
            .find_monospace()
            .ok_or_else(|| anyhow!("Monospace font not found via fontconfig"));
    }

    let font_match = finder.find_font(specifier).ok_or_else(|| {
        anyhow!(
            "Font not found: \"{}\" (not a valid path or font name)",
            specifier
        )
    })?;
    info!(
        "Font resolved by name: \"{}\" -> {} ({})",
        specifier,
        font_match.family,
        font_match.path.display()
    );
    Ok(font_match)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_matches() {
        assert!(family_matches("DejaVu Sans Mono", "DejaVu Sans Mono"));
        assert!(family_matches("dejavu", "DejaVu Sans Mono"));
        assert!(!family_matches("Hack", "DejaVu Sans"));
    }

    #[test]
    fn test_generic_alias_accepts_concrete_family() {
        assert!(!family_matches("monospace", "DejaVu Sans Mono"));
        assert!(accept_match("monospace", "DejaVu Sans Mono"));
        assert!(accept_match("Sans-Serif", "Noto Sans"));
        assert!(accept_match("Liberation Mono", "Liberation Mono"));
        assert!(!accept_match("Inconsolata", "DejaVu Sans Mono"));
    }

    #[test]
    fn test_resolve_existing_path() {
        let file = std::env::temp_dir().join("ftinit-resolve-test.ttf");
        std::fs::write(&file, b"x").unwrap();
        let m = resolve_font(file.to_str().unwrap()).unwrap();
        assert_eq!(m.path, file);
        let _ = std::fs::remove_file(&file);
    }
}
