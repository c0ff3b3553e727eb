//! Typed FreeType error codes

use super::defs::ft_error_definitions;
use std::fmt;

macro_rules! define_error_code {
    ($($variant:ident = $symbol:literal, $code:literal, $message:literal;)*) => {
        /// FreeType error code
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum FtErrorCode {
            $($variant = $code,)*
        }

        impl FtErrorCode {
            /// All codes in upstream order
            pub const ALL: &'static [FtErrorCode] = &[$(Self::$variant,)*];

            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Upstream symbol without the `FT_Err_` prefix
            pub fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)*
                }
            }

            pub fn message(self) -> &'static str {
                match self {
                    $(Self::$variant => $message,)*
                }
            }
        }
    };
}

ft_error_definitions!(define_error_code);

impl FtErrorCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl fmt::Display for FtErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (FT_Err_{}, 0x{:02X})", self.message(), self.symbol(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::defs::FT_ERROR_DEFS;
    use crate::errors::table::error_message;

    #[test]
    fn test_enum_agrees_with_definitions() {
        assert_eq!(FtErrorCode::ALL.len(), FT_ERROR_DEFS.len());
        for (code, def) in FtErrorCode::ALL.iter().zip(FT_ERROR_DEFS) {
            assert_eq!(code.code(), def.code);
            assert_eq!(code.symbol(), def.name);
            assert_eq!(code.message(), def.message);
            assert_eq!(error_message(def.code), Some(code.message()));
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(FtErrorCode::from_code(0), Some(FtErrorCode::Ok));
        assert_eq!(FtErrorCode::from_code(0x07), Some(FtErrorCode::UnimplementedFeature));
        assert_eq!(FtErrorCode::from_code(0xBA), Some(FtErrorCode::CorruptedFontGlyphs));
        assert_eq!(FtErrorCode::from_code(0x0D), None);
        assert_eq!(FtErrorCode::from_code(-1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FtErrorCode::InvalidPixelSize.to_string(),
            "invalid pixel size (FT_Err_Invalid_Pixel_Size, 0x17)"
        );
        assert!(FtErrorCode::Ok.is_ok());
        assert!(!FtErrorCode::OutOfMemory.is_ok());
    }
}
