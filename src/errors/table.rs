//! Terminated (code, message) table
//!
//! Each definition becomes one record in source order, followed by a
//! terminator record `(0, None)`. Scans stop at the terminator, so no
//! separate length is needed. Duplicate codes are kept as they appear.

use super::defs::{ft_error_definitions, ErrorDef};

/// One table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorRecord<'a> {
    pub code: i32,
    /// `None` only on the terminator
    pub message: Option<&'a str>,
}

impl<'a> ErrorRecord<'a> {
    /// End-of-table marker
    pub const TERMINATOR: ErrorRecord<'static> = ErrorRecord {
        code: 0,
        message: None,
    };

    pub const fn new(code: i32, message: &'a str) -> Self {
        Self {
            code,
            message: Some(message),
        }
    }

    pub fn is_terminator(&self) -> bool {
        self.message.is_none()
    }
}

impl<'a> From<&ErrorDef<'a>> for ErrorRecord<'a> {
    fn from(def: &ErrorDef<'a>) -> Self {
        Self::new(def.code, def.message)
    }
}

macro_rules! define_error_table {
    ($($variant:ident = $symbol:literal, $code:literal, $message:literal;)*) => {
        /// FreeType error table, terminated by `ErrorRecord::TERMINATOR`
        pub static FT_ERRORS: &[ErrorRecord<'static>] = &[
            $(ErrorRecord::new($code, $message),)*
            ErrorRecord::TERMINATOR,
        ];
    };
}

ft_error_definitions!(define_error_table);

/// Build a terminated table from a definition list
pub fn build_table<'a>(defs: &[ErrorDef<'a>]) -> Vec<ErrorRecord<'a>> {
    let mut table = Vec::with_capacity(defs.len() + 1);
    table.extend(defs.iter().map(ErrorRecord::from));
    table.push(ErrorRecord::TERMINATOR);
    table
}

/// Rows before the terminator (all rows if there is none)
pub fn records<'t, 'a>(table: &'t [ErrorRecord<'a>]) -> impl Iterator<Item = &'t ErrorRecord<'a>> {
    table.iter().take_while(|r| !r.is_terminator())
}

/// Linear scan for `code`, stopping at the first match or the terminator
pub fn lookup_in<'a>(table: &[ErrorRecord<'a>], code: i32) -> Option<&'a str> {
    records(table)
        .find(|r| r.code == code)
        .and_then(|r| r.message)
}

/// Message for a FreeType error code
pub fn error_message(code: i32) -> Option<&'static str> {
    lookup_in(FT_ERRORS, code)
}

/// Message for a FreeType error code, with a fallback for unknown codes
pub fn describe(code: i32) -> String {
    match error_message(code) {
        Some(message) => message.to_string(),
        None => format!("unknown FreeType error 0x{:02X}", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::defs::FT_ERROR_DEFS;

    const SAMPLE: &[ErrorDef<'static>] = &[
        ErrorDef { name: "Ok", code: 0, message: "no error" },
        ErrorDef { name: "Cannot_Open_Resource", code: 1, message: "cannot open resource" },
        ErrorDef { name: "Invalid_Argument", code: 6, message: "invalid argument" },
    ];

    #[test]
    fn test_static_table_matches_builder() {
        assert_eq!(FT_ERRORS, build_table(FT_ERROR_DEFS).as_slice());
    }

    #[test]
    fn test_static_table_shape() {
        assert_eq!(FT_ERRORS.len(), FT_ERROR_DEFS.len() + 1);
        let last = FT_ERRORS[FT_ERRORS.len() - 1];
        assert_eq!(last, ErrorRecord::TERMINATOR);
        assert_eq!(records(FT_ERRORS).count(), FT_ERROR_DEFS.len());
    }

    #[test]
    fn test_order_and_content_preserved() {
        let table = build_table(SAMPLE);
        assert_eq!(table.len(), SAMPLE.len() + 1);
        for (def, record) in SAMPLE.iter().zip(&table) {
            assert_eq!(record.code, def.code);
            assert_eq!(record.message, Some(def.message));
        }
        assert!(table[SAMPLE.len()].is_terminator());
    }

    #[test]
    fn test_empty_list_is_only_terminator() {
        let table = build_table(&[]);
        assert_eq!(table, vec![ErrorRecord::TERMINATOR]);
        assert_eq!(lookup_in(&table, 0), None);
        assert_eq!(records(&table).count(), 0);
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let defs = [
            ErrorDef { name: "A", code: 5, message: "first" },
            ErrorDef { name: "B", code: 5, message: "second" },
        ];
        let table = build_table(&defs);
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].message, Some("first"));
        assert_eq!(table[1].message, Some("second"));
        // first match wins
        assert_eq!(lookup_in(&table, 5), Some("first"));
    }

    #[test]
    fn test_code_zero_with_ok_entry() {
        let table = build_table(SAMPLE);
        assert_eq!(lookup_in(&table, 0), Some("no error"));
        assert_eq!(error_message(0), Some("no error"));
    }

    #[test]
    fn test_code_zero_without_ok_entry() {
        let table = build_table(&SAMPLE[1..]);
        assert_eq!(lookup_in(&table, 0), None);
        assert_eq!(lookup_in(&table, 6), Some("invalid argument"));
    }

    #[test]
    fn test_lookup_stops_at_terminator() {
        let mut table = build_table(&SAMPLE[1..2]);
        // rows after the terminator are never reached
        table.push(ErrorRecord::new(6, "hidden"));
        assert_eq!(lookup_in(&table, 6), None);
    }

    #[test]
    fn test_build_is_idempotent() {
        assert_eq!(build_table(SAMPLE), build_table(SAMPLE));
        assert_eq!(build_table(FT_ERROR_DEFS), build_table(FT_ERROR_DEFS));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(0x07), "unimplemented feature");
        assert_eq!(describe(0x40), "out of memory");
        assert_eq!(describe(0x7F), "unknown FreeType error 0x7F");
    }
}
