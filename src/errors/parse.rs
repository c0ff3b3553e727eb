//! Reader for FreeType's `fterrdef.h`
//!
//! Extracts `FT_ERRORDEF_( Name, 0xNN, "message" )` and
//! `FT_NOERRORDEF_( ... )` entries. Entries may span lines. Comments,
//! character literals and preprocessor directives are skipped.

use super::defs::ErrorDef;
use log::debug;
use thiserror::Error;

/// Reader failure, with the 1-based line where it was detected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionParseError {
    #[error("line {line}: unterminated comment")]
    UnterminatedComment { line: usize },

    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: usize },

    #[error("line {line}: unterminated character literal")]
    UnterminatedChar { line: usize },

    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("line {line}: expected {expected}, found `{found}`")]
    UnexpectedToken {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: invalid error code `{text}`")]
    InvalidCode { line: usize, text: String },
}

/// Owned definition read from a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDef {
    pub name: String,
    pub code: i32,
    pub message: String,
    /// Line of the entry macro
    pub line: usize,
}

impl ParsedDef {
    pub fn as_def(&self) -> ErrorDef<'_> {
        ErrorDef {
            name: &self.name,
            code: self.code,
            message: &self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Number(String),
    Str(String),
    Punct(char),
}

impl Token {
    fn text(&self) -> String {
        match self {
            Token::Ident(s) | Token::Number(s) => s.clone(),
            Token::Str(s) => format!("\"{}\"", s),
            Token::Punct(c) => c.to_string(),
        }
    }
}

const ENTRY_MACROS: [&str; 2] = ["FT_ERRORDEF_", "FT_NOERRORDEF_"];

/// Parse every error entry in `text`, in source order
pub fn parse_definitions(text: &str) -> Result<Vec<ParsedDef>, DefinitionParseError> {
    let tokens = tokenize(text)?;
    let mut defs = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let (line, token) = &tokens[i];
        i += 1;
        let Token::Ident(name) = token else {
            continue;
        };
        if !ENTRY_MACROS.contains(&name.as_str()) {
            continue;
        }

        let mut cursor = Cursor {
            tokens: &tokens,
            pos: i,
            line: *line,
        };
        cursor.expect_punct('(')?;
        let name = cursor.expect_ident()?;
        cursor.expect_punct(',')?;
        let code = cursor.expect_code()?;
        cursor.expect_punct(',')?;
        let message = cursor.expect_string()?;
        cursor.expect_punct(')')?;

        defs.push(ParsedDef {
            name,
            code,
            message,
            line: *line,
        });
        i = cursor.pos;
    }

    debug!("fterrdef: {} entries parsed", defs.len());
    Ok(defs)
}

struct Cursor<'t> {
    tokens: &'t [(usize, Token)],
    pos: usize,
    line: usize,
}

impl Cursor<'_> {
    fn next(&mut self, expected: &'static str) -> Result<&Token, DefinitionParseError> {
        match self.tokens.get(self.pos) {
            Some((line, token)) => {
                self.pos += 1;
                self.line = *line;
                Ok(token)
            }
            None => Err(DefinitionParseError::UnexpectedEof {
                line: self.line,
                expected,
            }),
        }
    }

    fn unexpected(&self, expected: &'static str, token: &Token) -> DefinitionParseError {
        DefinitionParseError::UnexpectedToken {
            line: self.line,
            expected,
            found: token.text(),
        }
    }

    fn expect_punct(&mut self, c: char) -> Result<(), DefinitionParseError> {
        let expected = match c {
            '(' => "`(`",
            ')' => "`)`",
            _ => "`,`",
        };
        let token = self.next(expected)?.clone();
        match token {
            Token::Punct(p) if p == c => Ok(()),
            other => Err(self.unexpected(expected, &other)),
        }
    }

    fn expect_ident(&mut self) -> Result<String, DefinitionParseError> {
        let token = self.next("error name")?.clone();
        match token {
            Token::Ident(name) => Ok(name),
            other => Err(self.unexpected("error name", &other)),
        }
    }

    /// Integer literal, optionally negated
    fn expect_code(&mut self) -> Result<i32, DefinitionParseError> {
        let mut token = self.next("error code")?.clone();
        let negative = token == Token::Punct('-');
        if negative {
            token = self.next("error code")?.clone();
        }
        match token {
            Token::Number(text) => match parse_code(&text) {
                Some(code) if negative => Ok(-code),
                Some(code) => Ok(code),
                None => Err(DefinitionParseError::InvalidCode {
                    line: self.line,
                    text: if negative { format!("-{}", text) } else { text },
                }),
            },
            other => Err(self.unexpected("error code", &other)),
        }
    }

    /// Adjacent literals are concatenated, as in C
    fn expect_string(&mut self) -> Result<String, DefinitionParseError> {
        let token = self.next("message string")?.clone();
        let mut message = match token {
            Token::Str(s) => s,
            other => return Err(self.unexpected("message string", &other)),
        };
        while let Some((_, Token::Str(more))) = self.tokens.get(self.pos) {
            message.push_str(more);
            self.pos += 1;
        }
        Ok(message)
    }
}

/// Decimal, `0x` hex or `0` octal, with optional C integer suffixes
pub fn parse_code(text: &str) -> Option<i32> {
    let digits = text.trim_end_matches(|c: char| matches!(c, 'u' | 'U' | 'l' | 'L'));
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i32::from_str_radix(hex, 16).ok()
    } else if digits.len() > 1 && digits.starts_with('0') {
        i32::from_str_radix(&digits[1..], 8).ok()
    } else {
        digits.parse().ok()
    }
}

/// Length of a backslash-newline continuation at `i` (`\\\n` or `\\\r\n`)
fn continuation_len(chars: &[char], i: usize) -> Option<usize> {
    if chars.get(i) != Some(&'\\') {
        return None;
    }
    match (chars.get(i + 1), chars.get(i + 2)) {
        (Some('\n'), _) => Some(2),
        (Some('\r'), Some('\n')) => Some(3),
        _ => None,
    }
}

/// Contents of a quoted literal starting at `chars[i] == quote`
///
/// Returns the unescaped text, the index past the closing quote and the
/// number of continuations crossed, or `None` if the line ends first.
fn read_quoted(chars: &[char], mut i: usize, quote: char) -> Option<(String, usize, usize)> {
    let mut s = String::new();
    let mut lines = 0;
    i += 1;
    loop {
        if let Some(len) = continuation_len(chars, i) {
            lines += 1;
            i += len;
            continue;
        }
        match chars.get(i) {
            None | Some('\n') => return None,
            Some(&c) if c == quote => return Some((s, i + 1, lines)),
            Some('\\') => {
                match chars.get(i + 1) {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('\n') | None => return None,
                    Some(&other) => s.push(other),
                }
                i += 2;
            }
            Some(&other) => {
                s.push(other);
                i += 1;
            }
        }
    }
}

fn tokenize(text: &str) -> Result<Vec<(usize, Token)>, DefinitionParseError> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut at_line_start = true;
    // Inside a preprocessor directive: lexed for comments and literals,
    // but produces no tokens
    let mut in_directive = false;
    let mut i = 0;

    while i < chars.len() {
        if let Some(len) = continuation_len(&chars, i) {
            line += 1;
            i += len;
            continue;
        }

        let c = chars[i];
        match c {
            '\n' => {
                line += 1;
                at_line_start = true;
                in_directive = false;
                i += 1;
            }
            c if c.is_whitespace() => i += 1,
            '#' if at_line_start => {
                at_line_start = false;
                in_directive = true;
                i += 1;
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                let start = line;
                i += 2;
                loop {
                    match chars.get(i) {
                        None => return Err(DefinitionParseError::UnterminatedComment { line: start }),
                        Some('*') if chars.get(i + 1) == Some(&'/') => {
                            i += 2;
                            break;
                        }
                        Some('\n') => {
                            line += 1;
                            i += 1;
                        }
                        Some(_) => i += 1,
                    }
                }
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '"' | '\'' => {
                at_line_start = false;
                let start = line;
                match read_quoted(&chars, i, c) {
                    Some((s, next, lines)) => {
                        line += lines;
                        i = next;
                        if c == '"' && !in_directive {
                            tokens.push((start, Token::Str(s)));
                        }
                    }
                    None if in_directive => {
                        // Stray quote in `#error` text and the like
                        while i < chars.len() && chars[i] != '\n' {
                            i += 1;
                        }
                    }
                    None if c == '"' => {
                        return Err(DefinitionParseError::UnterminatedString { line: start })
                    }
                    None => return Err(DefinitionParseError::UnterminatedChar { line: start }),
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                at_line_start = false;
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                if !in_directive {
                    tokens.push((line, Token::Ident(chars[start..i].iter().collect())));
                }
            }
            c if c.is_ascii_digit() => {
                at_line_start = false;
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphanumeric() {
                    i += 1;
                }
                if !in_directive {
                    tokens.push((line, Token::Number(chars[start..i].iter().collect())));
                }
            }
            other => {
                at_line_start = false;
                if !in_directive {
                    tokens.push((line, Token::Punct(other)));
                }
                i += 1;
            }
        }
    }

    Ok(tokens)
}

/// Difference between two definition lists, keyed by code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionMismatch {
    /// Present in the built-in list only
    Missing { code: i32, name: String },
    /// Present upstream only
    Extra { code: i32, name: String },
    /// Same code, different symbol
    NameChanged {
        code: i32,
        builtin: String,
        upstream: String,
    },
    /// Same code, different message
    MessageChanged {
        code: i32,
        builtin: String,
        upstream: String,
    },
}

impl std::fmt::Display for DefinitionMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { code, name } => {
                write!(f, "0x{:02X} {}: not in upstream list", code, name)
            }
            Self::Extra { code, name } => {
                write!(f, "0x{:02X} {}: not in built-in list", code, name)
            }
            Self::NameChanged {
                code,
                builtin,
                upstream,
            } => write!(f, "0x{:02X}: name {} -> {}", code, builtin, upstream),
            Self::MessageChanged {
                code,
                builtin,
                upstream,
            } => write!(f, "0x{:02X}: message \"{}\" -> \"{}\"", code, builtin, upstream),
        }
    }
}

/// Compare the built-in list against an upstream one
///
/// Entries are matched by the first occurrence of each code. Result order:
/// built-in order for missing/changed entries, then upstream order for extras.
pub fn compare_definitions(
    builtin: &[ErrorDef<'_>],
    upstream: &[ErrorDef<'_>],
) -> Vec<DefinitionMismatch> {
    let mut mismatches = Vec::new();

    for def in builtin {
        match upstream.iter().find(|u| u.code == def.code) {
            None => mismatches.push(DefinitionMismatch::Missing {
                code: def.code,
                name: def.name.to_string(),
            }),
            Some(up) => {
                if up.name != def.name {
                    mismatches.push(DefinitionMismatch::NameChanged {
                        code: def.code,
                        builtin: def.name.to_string(),
                        upstream: up.name.to_string(),
                    });
                }
                if up.message != def.message {
                    mismatches.push(DefinitionMismatch::MessageChanged {
                        code: def.code,
                        builtin: def.message.to_string(),
                        upstream: up.message.to_string(),
                    });
                }
            }
        }
    }

    for up in upstream {
        if !builtin.iter().any(|d| d.code == up.code) {
            mismatches.push(DefinitionMismatch::Extra {
                code: up.code,
                name: up.name.to_string(),
            });
        }
    }

    mismatches
}
