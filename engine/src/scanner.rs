//! Tokenizer for raw command-line arguments.
//!
//! The scanner splits the raw argument strings (process arguments, program
//! name already stripped) into typed lexical units. It is a pure function
//! of its input: no schema knowledge, no side effects, and the same input
//! always yields the same token sequence.
//!
//! Lexical policy, applied consistently:
//!
//! - `--name` → long option; `--name=value` → long option plus an attached
//!   value token.
//! - `-x` → short option; the full text after the dash is the alias (no
//!   short-option clustering).
//! - A lone `--` is the separator: every later argument is positional, no
//!   matter what it looks like.
//! - A lone `-` is positional (the conventional stdin placeholder).
//! - `-123`, `-4.5` and friends are positional: a dash followed by a digit
//!   or a decimal point reads as a negative number, not an option.
//! - `--=value` is the one structurally invalid form and fails the scan
//!   with [`ScanError::MalformedToken`].

use thiserror::Error;

/// A single lexical unit of the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `--name`: long option reference, name stored without dashes.
    LongOption(String),
    /// `-x`: short option reference, alias text stored without the dash.
    ShortOption(String),
    /// A value attached to the preceding long option with `=`.
    Value(String),
    /// A bare word, or anything after the `--` separator.
    Positional(String),
    /// The bare `--` separator.
    Separator,
}

/// Structural scan failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// An option marker with no name, e.g. `--=value`.
    #[error("malformed option token at position {index}: '{text}'")]
    MalformedToken { text: String, index: usize },
}

/// Scans raw arguments into an ordered token sequence.
///
/// # Examples
///
/// ```
/// use argot_engine::scanner::{Token, scan};
///
/// let args: Vec<String> = ["--level=3", "-v", "push", "--", "--not-an-option"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let tokens = scan(&args).unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::LongOption("level".into()),
///         Token::Value("3".into()),
///         Token::ShortOption("v".into()),
///         Token::Positional("push".into()),
///         Token::Separator,
///         Token::Positional("--not-an-option".into()),
///     ]
/// );
/// ```
pub fn scan(args: &[String]) -> Result<Vec<Token>, ScanError> {
    let mut tokens = Vec::with_capacity(args.len());
    let mut past_separator = false;

    for (index, arg) in args.iter().enumerate() {
        if past_separator {
            tokens.push(Token::Positional(arg.clone()));
            continue;
        }

        if arg == "--" {
            tokens.push(Token::Separator);
            past_separator = true;
        } else if let Some(rest) = arg.strip_prefix("--") {
            match rest.split_once('=') {
                Some(("", _)) => {
                    return Err(ScanError::MalformedToken {
                        text: arg.clone(),
                        index,
                    });
                }
                Some((name, value)) => {
                    tokens.push(Token::LongOption(name.to_string()));
                    tokens.push(Token::Value(value.to_string()));
                }
                None => tokens.push(Token::LongOption(rest.to_string())),
            }
        } else if let Some(rest) = arg.strip_prefix('-') {
            if rest.is_empty() || looks_numeric(rest) {
                tokens.push(Token::Positional(arg.clone()));
            } else {
                tokens.push(Token::ShortOption(rest.to_string()));
            }
        } else {
            tokens.push(Token::Positional(arg.clone()));
        }
    }

    Ok(tokens)
}

/// A dash followed by a digit or decimal point reads as a negative number.
fn looks_numeric(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}
