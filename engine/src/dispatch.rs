//! Single-pass dispatcher: tokens + schema → parsed result.
//!
//! The dispatcher walks the token sequence once, left to right, with one
//! token of lookahead (for option values). Subcommand resolution is greedy:
//! each positional-looking token that names a child of the current node
//! descends one level. The first option, separator, or non-matching
//! positional freezes the path for good; after that point a token whose
//! text happens to coincide with a subcommand name is an ordinary
//! positional. This keeps parsing deterministic and O(n) with no
//! backtracking.
//!
//! Within the frozen scope, option tokens are matched against the effective
//! scope: the leaf subcommand's own options, its ancestors' options, and
//! the schema globals. Problems are collected as [`Diagnostic`]s in the
//! result rather than returned as errors, so one parse reports everything
//! that is wrong with the input at once.

use std::collections::BTreeMap;

use tracing::debug;

use argot_core::{OptionSpec, Schema, SubcommandSpec};

use crate::result::{BoundValue, Diagnostic, DiagnosticKind, ParsedResult};
use crate::scanner::{ScanError, Token, scan};

/// Parse-behavior knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Promote unknown options from warnings to errors.
    pub strict: bool,
}

/// Dispatch state: selecting subcommands, or locked into option parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Still descending the subcommand tree (covers the root and every
    /// intermediate node; the current depth is the resolved path).
    Selecting,
    /// Path frozen; everything left is options and positionals.
    Options,
}

/// Parses raw arguments against a schema with default options.
///
/// This is the primary entry point. The argument list is the process
/// argument vector with the program name already stripped.
///
/// # Examples
///
/// ```
/// use argot_core::{OptionSpec, SchemaBuilder, SubcommandSpec, ValueKind};
/// use argot_engine::parse;
///
/// let schema = SchemaBuilder::new("git")
///     .subcommand(
///         SubcommandSpec::new("push")
///             .with_option(OptionSpec::with_value("remote", ValueKind::Str).required()),
///     )
///     .build()
///     .unwrap();
///
/// let args: Vec<String> = ["push", "--remote", "origin"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let result = parse(&schema, &args);
/// assert!(result.ok());
/// assert_eq!(result.path(), ["push"]);
/// assert_eq!(result.get_str("remote").unwrap(), Some("origin"));
/// ```
pub fn parse(schema: &Schema, args: &[String]) -> ParsedResult {
    parse_with(schema, args, ParseOptions::default())
}

/// Parses raw arguments with explicit [`ParseOptions`].
pub fn parse_with(schema: &Schema, args: &[String], opts: ParseOptions) -> ParsedResult {
    match scan(args) {
        Ok(tokens) => dispatch(schema, &tokens, opts),
        Err(ScanError::MalformedToken { text, index }) => ParsedResult {
            path: Vec::new(),
            bound: BTreeMap::new(),
            positionals: Vec::new(),
            diagnostics: vec![Diagnostic::error(
                DiagnosticKind::MalformedToken,
                &text,
                &format!("structurally invalid option token at position {index}"),
            )],
            declared: declared_kinds(schema, &[]),
        },
    }
}

/// Dispatches a pre-scanned token sequence against a schema.
///
/// One linear pass with a single token of lookahead; each call produces an
/// independent [`ParsedResult`] and the schema is never mutated, so
/// concurrent dispatches over one schema are safe.
pub fn dispatch(schema: &Schema, tokens: &[Token], opts: ParseOptions) -> ParsedResult {
    let mut scope: Vec<&SubcommandSpec> = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut bound: BTreeMap<String, BoundValue> = BTreeMap::new();
    let mut positionals: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut mode = Mode::Selecting;

    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            Token::Separator => {
                mode = Mode::Options;
            }
            Token::Positional(text) => {
                let child = match (mode, scope.last()) {
                    (Mode::Selecting, Some(node)) => node.find_subcommand(text),
                    (Mode::Selecting, None) => schema.find_subcommand(text),
                    (Mode::Options, _) => None,
                };
                match child {
                    Some(child) => {
                        debug!(subcommand = %child.name, depth = scope.len() + 1, "matched subcommand");
                        path.push(child.name.clone());
                        scope.push(child);
                    }
                    None => {
                        mode = Mode::Options;
                        positionals.push(text.clone());
                    }
                }
            }
            // A stray attached value; its option token handles the normal
            // cases, so reaching here means the scanner was fed directly.
            Token::Value(text) => {
                mode = Mode::Options;
                positionals.push(text.clone());
            }
            Token::LongOption(name) => {
                mode = Mode::Options;
                let spec = scope
                    .iter()
                    .rev()
                    .find_map(|node| node.find_long(name))
                    .or_else(|| schema.find_global_long(name));
                i = handle_option(
                    spec,
                    &format!("--{name}"),
                    tokens,
                    i,
                    opts,
                    &mut bound,
                    &mut diagnostics,
                );
            }
            Token::ShortOption(alias) => {
                mode = Mode::Options;
                // Aliases are single characters; longer text can match
                // nothing and goes straight to the unknown-option path.
                let spec = single_char(alias).and_then(|c| {
                    scope
                        .iter()
                        .rev()
                        .find_map(|node| node.find_short(c))
                        .or_else(|| schema.find_global_short(c))
                });
                i = handle_option(
                    spec,
                    &format!("-{alias}"),
                    tokens,
                    i,
                    opts,
                    &mut bound,
                    &mut diagnostics,
                );
            }
        }
        i += 1;
    }

    // Required checks and defaults run against the effective scope the
    // parse resolved to. An option already diagnosed as missing its value
    // is not re-reported as missing entirely.
    let value_missing: std::collections::HashSet<String> = diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::MissingValue)
        .map(|d| d.subject.clone())
        .collect();
    let mut declared = BTreeMap::new();
    for spec in effective_specs(schema, &scope) {
        declared.insert(spec.name.clone(), spec.kind);

        if bound.contains_key(&spec.name) {
            continue;
        }
        if value_missing.contains(&spec.name) {
            continue;
        }
        if spec.required {
            diagnostics.push(Diagnostic::error(
                DiagnosticKind::MissingRequiredOption,
                &spec.name,
                &format!("required option '--{}' was not provided", spec.name),
            ));
        } else if let Some(default) = &spec.default {
            debug!(option = %spec.name, value = %default, "bound default");
            bound.insert(
                spec.name.clone(),
                BoundValue {
                    kind: spec.kind,
                    text: default.clone(),
                    from_default: true,
                },
            );
        }
    }

    ParsedResult {
        path,
        bound,
        positionals,
        diagnostics,
        declared,
    }
}

/// Binds a matched option (consuming its value token if arity demands) or
/// records an unknown-option diagnostic. Returns the index of the last
/// token consumed.
fn handle_option(
    spec: Option<&OptionSpec>,
    display: &str,
    tokens: &[Token],
    i: usize,
    opts: ParseOptions,
    bound: &mut BTreeMap<String, BoundValue>,
    diagnostics: &mut Vec<Diagnostic>,
) -> usize {
    let Some(spec) = spec else {
        let message = format!("unknown option '{display}'");
        let option_name = display;
        debug!(option = %option_name, "unknown option");
        diagnostics.push(if opts.strict {
            Diagnostic::error(DiagnosticKind::UnknownOption, display, &message)
        } else {
            Diagnostic::warning(DiagnosticKind::UnknownOption, display, &message)
        });
        // An '='-attached value belongs to the unknown option; drop it too.
        if matches!(tokens.get(i + 1), Some(Token::Value(_))) {
            return i + 1;
        }
        return i;
    };

    if spec.kind.arity() == 0 {
        let mut end = i;
        if let Some(Token::Value(text)) = tokens.get(i + 1) {
            diagnostics.push(Diagnostic::error(
                DiagnosticKind::UnexpectedValue,
                &spec.name,
                &format!("flag '--{}' takes no value, got '{text}'", spec.name),
            ));
            end = i + 1;
        }
        debug!(option = %spec.name, "bound flag");
        bound.insert(
            spec.name.clone(),
            BoundValue {
                kind: spec.kind,
                text: "true".to_string(),
                from_default: false,
            },
        );
        return end;
    }

    // Arity 1: one token of lookahead. An option marker, the separator, or
    // end of input in the value slot is a missing value.
    match tokens.get(i + 1) {
        Some(Token::Value(text)) | Some(Token::Positional(text)) => {
            if !spec.kind.accepts(text) {
                diagnostics.push(Diagnostic::error(
                    DiagnosticKind::InvalidValue,
                    &spec.name,
                    &format!("'{text}' is not a valid {} value", spec.kind),
                ));
            }
            debug!(option = %spec.name, value = %text, "bound option");
            bound.insert(
                spec.name.clone(),
                BoundValue {
                    kind: spec.kind,
                    text: text.clone(),
                    from_default: false,
                },
            );
            i + 1
        }
        _ => {
            diagnostics.push(Diagnostic::error(
                DiagnosticKind::MissingValue,
                &spec.name,
                &format!("option '{display}' expects a value"),
            ));
            i
        }
    }
}

/// Options visible in the resolved scope: schema globals plus every node's
/// options along the resolved path.
fn effective_specs<'a>(
    schema: &'a Schema,
    scope: &[&'a SubcommandSpec],
) -> impl Iterator<Item = &'a OptionSpec> {
    schema
        .globals()
        .iter()
        .chain(scope.iter().flat_map(|node| node.options.iter()))
}

fn declared_kinds(
    schema: &Schema,
    scope: &[&SubcommandSpec],
) -> BTreeMap<String, argot_core::ValueKind> {
    effective_specs(schema, scope)
        .map(|spec| (spec.name.clone(), spec.kind))
        .collect()
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
