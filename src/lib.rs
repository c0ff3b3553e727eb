//! ftinit - FreeType error table and LCD-enabled library setup
//!
//! The FreeType error-definition list is kept once in `errors::defs` and
//! expanded into a terminated `(code, message)` table, a typed code enum,
//! and the messages attached to every FreeType status this crate reports.

pub mod config;
pub mod constants;
pub mod errors;
pub mod font;

pub use errors::{describe, error_message, FtError, FtErrorCode, ErrorRecord, FT_ERRORS};
