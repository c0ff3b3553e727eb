//! FreeType library setup
//!
//! Initializes FreeType and applies the subpixel (LCD) configuration.
//! Raw status codes from FreeType are reported through the error table.

use freetype::face::LoadFlag;
use freetype::ffi::{FT_Error, FT_Library};
use freetype::{LcdFilter, Library};
use log::{debug, info, warn};
use std::ffi::CStr;

use crate::config::FreetypeConfig;
use crate::errors::{check, FtError, FtErrorCode};

// Raw status codes and calls freetype-rs does not wrap
extern "C" {
    fn FT_Library_SetLcdFilterWeights(library: FT_Library, weights: *const u8) -> FT_Error;

    fn FT_Library_Version(
        library: FT_Library,
        amajor: *mut libc::c_int,
        aminor: *mut libc::c_int,
        apatch: *mut libc::c_int,
    );

    fn FT_Error_String(error_code: FT_Error) -> *const libc::c_char;
}

/// LCD rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LcdMode {
    /// Normal grayscale (1 byte/pixel)
    Grayscale,
    /// Horizontal RGB subpixel (3 bytes/pixel)
    #[default]
    LcdHorizontal,
    /// Vertical RGB subpixel (3 bytes/pixel)
    LcdVertical,
}

/// LCD filter setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LcdFilterMode {
    None,
    Default,
    #[default]
    Light,
    Legacy,
    /// Custom weights (specified via lcd_weights)
    Custom,
}

impl LcdFilterMode {
    /// Convert from config string
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "default" => Self::Default,
            "light" => Self::Light,
            "legacy" => Self::Legacy,
            "custom" => Self::Custom,
            _ => Self::Light,
        }
    }

    fn to_freetype(self) -> Option<LcdFilter> {
        match self {
            Self::None => Some(LcdFilter::LcdFilterNone),
            Self::Default => Some(LcdFilter::LcdFilterDefault),
            Self::Light => Some(LcdFilter::LcdFilterLight),
            Self::Legacy => Some(LcdFilter::LcdFilterLegacy),
            Self::Custom => None, // Custom is configured via weights
        }
    }
}

/// Hinting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintingMode {
    /// Normal hinting (sharp, slightly thicker)
    Normal,
    /// Light hinting (natural curves, slightly thinner)
    #[default]
    Light,
    /// No hinting (most natural)
    None,
}

impl HintingMode {
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Self::Normal,
            "none" | "off" => Self::None,
            _ => Self::Light,
        }
    }

    pub(crate) fn to_load_flag(self, lcd_mode: LcdMode) -> LoadFlag {
        match (self, lcd_mode) {
            (Self::Normal, LcdMode::Grayscale) => LoadFlag::TARGET_NORMAL,
            (Self::Normal, LcdMode::LcdHorizontal) => LoadFlag::TARGET_LCD,
            (Self::Normal, LcdMode::LcdVertical) => LoadFlag::TARGET_LCD_V,
            (Self::Light, _) => LoadFlag::TARGET_LIGHT,
            (Self::None, _) => LoadFlag::NO_HINTING,
        }
    }
}

/// LCD subpixel order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LcdSubpixel {
    /// Horizontal RGB (common)
    #[default]
    Rgb,
    /// Horizontal BGR
    Bgr,
    /// Vertical RGB
    VRgb,
    /// Vertical BGR
    VBgr,
}

impl LcdSubpixel {
    /// Convert from config string
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "bgr" => Self::Bgr,
            "vrgb" => Self::VRgb,
            "vbgr" => Self::VBgr,
            _ => Self::Rgb,
        }
    }

    pub fn to_lcd_mode(self) -> LcdMode {
        match self {
            Self::Rgb | Self::Bgr => LcdMode::LcdHorizontal,
            Self::VRgb | Self::VBgr => LcdMode::LcdVertical,
        }
    }

    /// BGR panels need R/B swapped
    pub fn is_bgr(self) -> bool {
        matches!(self, Self::Bgr | Self::VBgr)
    }
}

/// Initialized FreeType library with its effective rendering setup
pub struct FtLibrary {
    library: Library,
    /// Effective mode (grayscale if LCD was requested but unavailable)
    lcd_mode: LcdMode,
    bgr: bool,
    hinting: HintingMode,
    /// Filter actually applied, if any
    lcd_filter: Option<LcdFilterMode>,
}

impl FtLibrary {
    /// Initialize FreeType and apply the LCD configuration
    pub fn init(config: &FreetypeConfig) -> Result<Self, FtError> {
        let library = Library::init()?;
        let (major, minor, patch) = library_version(&library);
        info!("FreeType {}.{}.{} initialized", major, minor, patch);

        let subpixel = LcdSubpixel::from_str(&config.lcd_subpixel);
        let hinting = HintingMode::from_str(&config.hinting);
        let (lcd_mode, lcd_filter) = if config.subpixel_rendering {
            let filter = LcdFilterMode::from_str(&config.lcd_filter);
            resolve_lcd(apply_lcd_filter(&library, filter, config.lcd_weights), subpixel)?
        } else {
            debug!("Subpixel rendering disabled by config");
            (LcdMode::Grayscale, None)
        };

        info!(
            "FreeType render setup: {:?}, filter={:?}, hinting={:?}, bgr={}",
            lcd_mode,
            lcd_filter,
            hinting,
            subpixel.is_bgr()
        );

        Ok(Self {
            library,
            lcd_mode,
            bgr: subpixel.is_bgr(),
            hinting,
            lcd_filter,
        })
    }

    /// Runtime FreeType version (major, minor, patch)
    pub fn version(&self) -> (i32, i32, i32) {
        library_version(&self.library)
    }

    pub fn lcd_mode(&self) -> LcdMode {
        self.lcd_mode
    }

    /// True when subpixel rendering is in effect
    pub fn lcd_enabled(&self) -> bool {
        self.lcd_mode != LcdMode::Grayscale
    }

    pub fn lcd_filter(&self) -> Option<LcdFilterMode> {
        self.lcd_filter
    }

    pub fn is_bgr(&self) -> bool {
        self.bgr
    }

    pub fn hinting(&self) -> HintingMode {
        self.hinting
    }

    pub(crate) fn inner(&self) -> &Library {
        &self.library
    }
}

fn library_version(library: &Library) -> (i32, i32, i32) {
    let (mut major, mut minor, mut patch) = (0, 0, 0);
    unsafe {
        FT_Library_Version(library.raw(), &mut major, &mut minor, &mut patch);
    }
    (major, minor, patch)
}

/// Set the LCD filter, returning the filter actually applied
fn apply_lcd_filter(
    library: &Library,
    filter: LcdFilterMode,
    weights: Option<[u8; 5]>,
) -> Result<LcdFilterMode, FtError> {
    if filter == LcdFilterMode::Custom {
        if let Some(weights) = weights {
            check(unsafe { FT_Library_SetLcdFilterWeights(library.raw(), weights.as_ptr()) })?;
            info!("FreeType LCD filter: Custom {:?}", weights);
            return Ok(LcdFilterMode::Custom);
        }
        warn!("LCD filter \"custom\" without lcd_weights, using Light");
        return apply_lcd_filter(library, LcdFilterMode::Light, None);
    }

    if let Some(ft_filter) = filter.to_freetype() {
        library.set_lcd_filter(ft_filter)?;
        info!("FreeType LCD filter: {:?}", filter);
    }
    Ok(filter)
}

/// Effective mode and filter after an attempt to set the LCD filter
///
/// `Unimplemented_Feature` means FreeType was built without subpixel
/// rendering: fall back to grayscale. Other errors propagate.
fn resolve_lcd(
    applied: Result<LcdFilterMode, FtError>,
    subpixel: LcdSubpixel,
) -> Result<(LcdMode, Option<LcdFilterMode>), FtError> {
    match applied {
        Ok(filter) => Ok((subpixel.to_lcd_mode(), Some(filter))),
        Err(e) if e.code() == Some(FtErrorCode::UnimplementedFeature) => {
            warn!(
                "FreeType built without subpixel rendering ({}), using grayscale",
                e
            );
            Ok((LcdMode::Grayscale, None))
        }
        Err(e) => Err(e),
    }
}

/// FreeType's own message for `code`
///
/// Only available when FreeType was built with `FT_CONFIG_OPTION_ERROR_STRINGS`.
pub fn library_error_string(code: i32) -> Option<String> {
    let ptr = unsafe { FT_Error_String(code) };
    if ptr.is_null() {
        return None;
    }
    let message = unsafe { CStr::from_ptr(ptr) };
    Some(message.to_string_lossy().into_owned())
}
