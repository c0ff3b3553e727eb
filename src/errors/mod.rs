//! FreeType error codes
//!
//! Handles:
//! - The FreeType error-definition list (single source)
//! - Terminated (code, message) table and lookup
//! - Typed error codes
//! - Reading and comparing an installed `fterrdef.h`
//! - Generating table source from a definition list

pub mod code;
pub mod defs;
pub mod emit;
pub mod error;
pub mod parse;
pub mod table;

pub use code::FtErrorCode;
pub use defs::{ErrorDef, FT_ERROR_DEFS};
pub use emit::emit_table_source;
pub use error::{check, FtError};
pub use parse::{compare_definitions, parse_definitions, DefinitionMismatch, DefinitionParseError, ParsedDef};
pub use table::{build_table, describe, error_message, lookup_in, records, ErrorRecord, FT_ERRORS};
