use super::code::FtErrorCode;
use super::table::describe;
use freetype::ffi::FT_Error;
use thiserror::Error;

/// Errors raised while driving FreeType
#[derive(Debug, Error)]
pub enum FtError {
    /// Raw status code returned by a FreeType call
    #[error("FreeType error 0x{code:02X}: {message}")]
    FreeType { code: i32, message: String },

    #[error("FreeType error: {0}")]
    Binding(#[from] freetype::Error),

    #[error("glyph not found for {0:?}")]
    MissingGlyph(char),

    #[error("glyph too large ({width}x{height})")]
    GlyphTooLarge { width: u32, height: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FtError {
    pub fn from_code(code: FT_Error) -> Self {
        Self::FreeType {
            code,
            message: describe(code),
        }
    }

    /// Typed code, if this is a known FreeType status
    pub fn code(&self) -> Option<FtErrorCode> {
        match self {
            Self::FreeType { code, .. } => FtErrorCode::from_code(*code),
            Self::Binding(freetype::Error::UnimplementedFeature) => {
                Some(FtErrorCode::UnimplementedFeature)
            }
            _ => None,
        }
    }
}

/// Convert a raw FreeType status into a `Result`
pub fn check(code: FT_Error) -> Result<(), FtError> {
    if code == 0 {
        Ok(())
    } else {
        Err(FtError::from_code(code))
    }
}
