//! Rust source generator for error tables
//!
//! Turns a definition list (usually one read from an installed `fterrdef.h`)
//! into a static `ErrorRecord` literal with its terminator row.

use super::defs::ErrorDef;

fn code_literal(code: i32) -> String {
    if code < 0 {
        code.to_string()
    } else {
        format!("0x{:02X}", code)
    }
}

/// Render `defs` as a Rust source file declaring `FT_ERRORS`
///
/// The output depends only on `defs`, so identical input gives
/// byte-identical output.
pub fn emit_table_source(defs: &[ErrorDef<'_>]) -> String {
    let mut out = String::new();
    out.push_str("// @generated by `ftinit --emit-table`. Do not edit.\n");
    out.push_str(&format!(
        "// {} FreeType error definitions plus terminator.\n",
        defs.len()
    ));
    out.push('\n');
    out.push_str("pub static FT_ERRORS: &[ErrorRecord<'static>] = &[\n");
    for def in defs {
        out.push_str(&format!(
            "    ErrorRecord {{ code: {}, message: Some({:?}) }}, // {}\n",
            code_literal(def.code),
            def.message,
            def.name
        ));
    }
    out.push_str("    ErrorRecord { code: 0, message: None },\n");
    out.push_str("];\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::defs::FT_ERROR_DEFS;

    #[test]
    fn test_output_is_stable() {
        assert_eq!(emit_table_source(FT_ERROR_DEFS), emit_table_source(FT_ERROR_DEFS));
    }

    #[test]
    fn test_rows_and_terminator() {
        let defs = [
            ErrorDef { name: "Ok", code: 0, message: "no error" },
            ErrorDef { name: "Missing_Bbx_Field", code: 0xB7, message: "`BBX' field missing" },
        ];
        let src = emit_table_source(&defs);
        let rows: Vec<&str> = src.lines().filter(|l| l.trim_start().starts_with("ErrorRecord")).collect();
        assert_eq!(
            rows,
            vec![
                "    ErrorRecord { code: 0x00, message: Some(\"no error\") }, // Ok",
                "    ErrorRecord { code: 0xB7, message: Some(\"`BBX' field missing\") }, // Missing_Bbx_Field",
                "    ErrorRecord { code: 0, message: None },",
            ]
        );
        assert!(src.ends_with("];\n"));
    }

    #[test]
    fn test_preamble_lines() {
        let defs = [ErrorDef { name: "Ok", code: 0, message: "no error" }];
        let src = emit_table_source(&defs);
        let head: Vec<&str> = src.lines().take(4).collect();
        assert_eq!(
            head,
            vec![
                "// @generated by `ftinit --emit-table`. Do not edit.",
                "// 1 FreeType error definitions plus terminator.",
                "",
                "pub static FT_ERRORS: &[ErrorRecord<'static>] = &[",
            ]
        );
    }

    #[test]
    fn test_empty_list_emits_terminator_only() {
        let src = emit_table_source(&[]);
        assert!(src.contains("// 0 FreeType error definitions plus terminator."));
        assert_eq!(src.matches("ErrorRecord {").count(), 1);
    }

    #[test]
    fn test_escapes_quotes() {
        let defs = [ErrorDef { name: "Q", code: 1, message: "say \"hi\"" }];
        assert!(emit_table_source(&defs).contains(r#"Some("say \"hi\"")"#));
    }

    #[test]
    fn test_negative_code_is_decimal() {
        let defs = [ErrorDef { name: "Neg", code: -3, message: "negative" }];
        assert!(emit_table_source(&defs).contains("code: -3,"));
    }
}
