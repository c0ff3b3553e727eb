//! ftinit - FreeType error table and LCD setup diagnostics

use anyhow::{anyhow, bail, Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use ftinit::config::{self, Config};
use ftinit::constants::{FTERRDEF_PATHS, MAX_FONT_SIZE, MIN_FONT_SIZE};
use ftinit::errors::parse::parse_code;
use ftinit::errors::{
    compare_definitions, emit_table_source, error_message, parse_definitions, records, ErrorDef,
    FtErrorCode, ParsedDef, FT_ERRORS, FT_ERROR_DEFS,
};
use ftinit::font::{library_error_string, resolve_font, FtFace, FtLibrary};

/// Print help message
fn print_help() {
    println!(
        r#"ftinit {} - FreeType error table and LCD setup diagnostics

USAGE:
    ftinit [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    --list                  Print the FreeType error table
    --lookup=CODE           Describe an error code (decimal or 0x hex)
    --verify[=PATH]         Compare the built-in list with an installed fterrdef.h
    --emit-table=PATH       Write the error table as Rust source ("-" for stdout)
    --from=PATH             Read definitions for --emit-table from fterrdef.h
    --probe[=FONT]          Initialize FreeType and rasterize sample glyphs
    --size=N                Probe pixel size
    --text=STR              Probe characters
    --init-config           Generate config file
    -f, --force             Overwrite config file without confirmation

EXAMPLES:
    ftinit --lookup=0x07
    ftinit --verify
    ftinit --emit-table=- --from=/usr/include/freetype2/freetype/fterrdef.h
    ftinit --probe="DejaVu Sans Mono" --size=20

CONFIG FILE:
    ~/.config/ftinit/config.toml (override with FTINIT_CONFIG)
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// `--name` or `--name=value`
fn has_flag(args: &[String], name: &str) -> bool {
    args.iter()
        .any(|a| a == name || a.strip_prefix(name).is_some_and(|rest| rest.starts_with('=')))
}

/// Value of `--name=value`
fn arg_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .find_map(|a| a.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')))
}

fn list_errors() {
    for record in records(FT_ERRORS) {
        let symbol = FtErrorCode::from_code(record.code)
            .map(FtErrorCode::symbol)
            .unwrap_or("?");
        println!(
            "0x{:02X}  {:<32} {}",
            record.code,
            symbol,
            record.message.unwrap_or_default()
        );
    }
    println!("({} entries)", records(FT_ERRORS).count());
}

fn lookup(value: &str) -> Result<()> {
    let code = parse_code(value).ok_or_else(|| anyhow!("Invalid error code: {}", value))?;
    match error_message(code) {
        Some(message) => {
            let symbol = FtErrorCode::from_code(code)
                .map(FtErrorCode::symbol)
                .unwrap_or("?");
            println!("0x{:02X} FT_Err_{}: {}", code, symbol, message);
        }
        None => println!("0x{:02X}: not in FreeType error table", code),
    }
    match library_error_string(code) {
        Some(native) => println!("  FreeType says: {}", native),
        None => println!("  FreeType says: (no error strings in this build)"),
    }
    Ok(())
}

fn find_fterrdef(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }
    FTERRDEF_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
        .ok_or_else(|| anyhow!("fterrdef.h not found; pass --verify=PATH"))
}

fn read_definitions(path: &Path) -> Result<Vec<ParsedDef>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let defs = parse_definitions(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    info!("{}: {} definitions", path.display(), defs.len());
    Ok(defs)
}

fn verify(explicit: Option<&str>) -> Result<()> {
    let path = find_fterrdef(explicit)?;
    let parsed = read_definitions(&path)?;
    let upstream: Vec<ErrorDef<'_>> = parsed.iter().map(ParsedDef::as_def).collect();
    let mismatches = compare_definitions(FT_ERROR_DEFS, &upstream);

    if mismatches.is_empty() {
        println!(
            "[OK] {} definitions match {}",
            FT_ERROR_DEFS.len(),
            path.display()
        );
        return Ok(());
    }

    for m in &mismatches {
        println!("  {}", m);
    }
    bail!(
        "{} difference(s) between built-in list and {}",
        mismatches.len(),
        path.display()
    )
}

fn emit_table(output: &str, from: Option<&str>) -> Result<()> {
    let source = match from {
        Some(header) => {
            let parsed = read_definitions(Path::new(header))?;
            let defs: Vec<ErrorDef<'_>> = parsed.iter().map(ParsedDef::as_def).collect();
            emit_table_source(&defs)
        }
        None => emit_table_source(FT_ERROR_DEFS),
    };

    if output == "-" {
        print!("{}", source);
    } else {
        std::fs::write(output, &source).with_context(|| format!("Failed to write {}", output))?;
        println!("Error table written: {}", output);
    }
    Ok(())
}

fn probe(cfg: &Config, args: &[String]) -> Result<()> {
    let font_spec = arg_value(args, "--probe").unwrap_or(cfg.probe.font.as_str());
    let size = match arg_value(args, "--size") {
        Some(s) => s.parse::<u32>().with_context(|| format!("Invalid size: {}", s))?,
        None => cfg.probe.size,
    }
    .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    let text = arg_value(args, "--text").unwrap_or(cfg.probe.text.as_str());

    let library = FtLibrary::init(&cfg.freetype)?;
    let (major, minor, patch) = library.version();
    println!("FreeType:  {}.{}.{}", major, minor, patch);
    println!(
        "Subpixel:  {} ({:?}, filter {:?}, hinting {:?})",
        if library.lcd_enabled() { "enabled" } else { "unavailable or disabled" },
        library.lcd_mode(),
        library.lcd_filter(),
        library.hinting()
    );

    let font = resolve_font(font_spec)?;
    let face = FtFace::from_file(&library, &font.path, size)?;
    println!("Font:      {} ({})", face.family_name(), font.path.display());
    if let Some((ascender, descender, height)) = face.line_metrics() {
        println!(
            "Metrics:   {}px ascender {} descender {} height {}",
            face.size(),
            ascender,
            descender,
            height
        );
    }

    for ch in text.chars() {
        match face.rasterize(ch) {
            Ok(glyph) => println!(
                "  {:?}: {}x{} bearing ({}, {}) advance {} [{} B/px]",
                ch,
                glyph.width,
                glyph.height,
                glyph.bearing_x,
                glyph.bearing_y,
                glyph.advance,
                glyph.bytes_per_pixel()
            ),
            Err(e) => println!("  {:?}: {}", ch, e),
        }
    }
    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    if let Some(config_path) = config::default_config_path() {
        if config_path.exists() && !force {
            println!("Config file already exists: {}", config_path.display());
            print!("Overwrite? [y/N]: ");
            std::io::Write::flush(&mut std::io::stdout())?;

            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;
            let input = input.trim().to_lowercase();

            if input != "y" && input != "yes" {
                println!("Aborted.");
                return Ok(());
            }
        }
    }

    let path = Config::write_default_config()?;
    println!("Config file generated: {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || has_flag(&args, "--help") || has_flag(&args, "-h") {
        print_help();
        return Ok(());
    }

    if has_flag(&args, "--version") || has_flag(&args, "-V") {
        println!("ftinit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if has_flag(&args, "--init-config") {
        let force = has_flag(&args, "--force") || has_flag(&args, "-f");
        return init_config(force);
    }

    if has_flag(&args, "--list") {
        list_errors();
        return Ok(());
    }

    if let Some(value) = arg_value(&args, "--lookup") {
        return lookup(value);
    }

    if has_flag(&args, "--verify") {
        return verify(arg_value(&args, "--verify"));
    }

    if let Some(output) = arg_value(&args, "--emit-table") {
        return emit_table(output, arg_value(&args, "--from"));
    }

    if has_flag(&args, "--probe") {
        let cfg = Config::load();
        return probe(&cfg, &args);
    }

    print_help();
    bail!("Unknown arguments: {}", args.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flags_and_values() {
        let a = args(&["--verify=/tmp/x.h", "--list", "--size=20"]);
        assert!(has_flag(&a, "--verify"));
        assert!(has_flag(&a, "--list"));
        assert!(!has_flag(&a, "--lis"));
        assert!(!has_flag(&a, "--probe"));
        assert_eq!(arg_value(&a, "--verify"), Some("/tmp/x.h"));
        assert_eq!(arg_value(&a, "--size"), Some("20"));
        assert_eq!(arg_value(&a, "--list"), None);
    }

    #[test]
    fn test_explicit_fterrdef_path() {
        assert_eq!(find_fterrdef(Some("/x/fterrdef.h")).unwrap(), PathBuf::from("/x/fterrdef.h"));
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        assert!(lookup("zz").is_err());
        assert!(lookup("0x07").is_ok());
    }
}
