//! Error table properties through the public API

use ftinit::errors::{
    build_table, compare_definitions, emit_table_source, lookup_in, parse_definitions, records,
    ErrorDef, ParsedDef, FT_ERROR_DEFS,
};
use ftinit::{describe, error_message, ErrorRecord, FtErrorCode, FT_ERRORS};

#[test]
fn table_mirrors_definition_list() {
    assert_eq!(FT_ERRORS.len(), FT_ERROR_DEFS.len() + 1);
    for (def, record) in FT_ERROR_DEFS.iter().zip(FT_ERRORS) {
        assert_eq!(record.code, def.code, "{}", def.name);
        assert_eq!(record.message, Some(def.message), "{}", def.name);
    }
    assert_eq!(FT_ERRORS.last(), Some(&ErrorRecord::TERMINATOR));
}

#[test]
fn only_terminator_has_no_message() {
    let absent: Vec<usize> = FT_ERRORS
        .iter()
        .enumerate()
        .filter(|(_, r)| r.message.is_none())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(absent, vec![FT_ERRORS.len() - 1]);
}

#[test]
fn every_code_resolves_to_its_first_message() {
    for def in FT_ERROR_DEFS {
        assert_eq!(error_message(def.code), Some(def.message));
        assert_eq!(FtErrorCode::from_code(def.code).map(|c| c.message()), Some(def.message));
    }
    assert_eq!(error_message(0), Some("no error"));
    assert_eq!(error_message(0x0F), None);
    assert!(describe(0x0F).starts_with("unknown FreeType error"));
}

#[test]
fn terminator_follows_any_list() {
    for n in 0..=3 {
        let table = build_table(&FT_ERROR_DEFS[..n]);
        assert_eq!(table.len(), n + 1);
        assert_eq!(table[n], ErrorRecord::TERMINATOR);
        assert_eq!(records(&table).count(), n);
    }
}

#[test]
fn code_zero_depends_on_ok_entry() {
    let with_ok = build_table(&FT_ERROR_DEFS[..4]);
    assert_eq!(lookup_in(&with_ok, 0), Some("no error"));

    let without_ok = build_table(&FT_ERROR_DEFS[1..4]);
    assert_eq!(lookup_in(&without_ok, 0), None);
}

#[test]
fn header_rendered_from_builtin_list_reads_back_equal() {
    let mut header = String::from("/* generated for test */\n#ifndef FT_ERR_PREFIX\n#endif\n");
    for (i, def) in FT_ERROR_DEFS.iter().enumerate() {
        let macro_name = if i == 0 { "FT_NOERRORDEF_" } else { "FT_ERRORDEF_" };
        header.push_str(&format!(
            "  {}( {},   0x{:02X},\n                \"{}\" )\n",
            macro_name, def.name, def.code, def.message
        ));
    }

    let parsed = parse_definitions(&header).unwrap();
    let upstream: Vec<ErrorDef<'_>> = parsed.iter().map(ParsedDef::as_def).collect();
    assert!(compare_definitions(FT_ERROR_DEFS, &upstream).is_empty());
    assert_eq!(build_table(&upstream), FT_ERRORS);
    assert_eq!(emit_table_source(&upstream), emit_table_source(FT_ERROR_DEFS));
}
