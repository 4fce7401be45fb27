//! Parsed-result model: bound values, diagnostics, and typed accessors.
//!
//! A [`ParsedResult`] is the immutable output of one parse call. It carries
//! the resolved subcommand path, the bound option values, leftover
//! positionals, and every diagnostic collected along the way. Parse-time
//! problems are *collected*, never thrown, so a caller can inspect all of
//! them at once; the only error surfaced through `Result` here is
//! [`AccessError`], which flags programmer misuse of the typed accessors.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use argot_core::ValueKind;

/// How severe a diagnostic is.
///
/// [`ParsedResult::ok`] is `true` iff no `Error`-severity diagnostic was
/// collected; warnings do not fail a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// Structured kind of a parse-time diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Structurally invalid token, e.g. `--=value`.
    MalformedToken,
    /// An arity-1 option with no value token following it.
    MissingValue,
    /// An option token that matches nothing in the effective scope.
    UnknownOption,
    /// A required option left unbound at the end of the parse.
    MissingRequiredOption,
    /// A value attached with `=` to an option that takes none.
    UnexpectedValue,
    /// A value that does not parse under the option's declared kind.
    InvalidValue,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedToken => write!(f, "malformed_token"),
            Self::MissingValue => write!(f, "missing_value"),
            Self::UnknownOption => write!(f, "unknown_option"),
            Self::MissingRequiredOption => write!(f, "missing_required_option"),
            Self::UnexpectedValue => write!(f, "unexpected_value"),
            Self::InvalidValue => write!(f, "invalid_value"),
        }
    }
}

/// One collected parse-time problem.
///
/// # Examples
///
/// ```
/// use argot_engine::result::{Diagnostic, DiagnosticKind, Severity};
///
/// let diag = Diagnostic::error(DiagnosticKind::MissingValue, "remote", "expected a value");
/// assert_eq!(diag.severity, Severity::Error);
/// assert_eq!(diag.to_string(), "missing_value: remote: expected a value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// The option name or token text the diagnostic is about.
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    /// Creates an `Error`-severity diagnostic.
    pub fn error(kind: DiagnosticKind, subject: &str, message: &str) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a `Warning`-severity diagnostic.
    pub fn warning(kind: DiagnosticKind, subject: &str, message: &str) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.kind, self.subject, self.message)
    }
}

/// A value bound to an option during parsing.
///
/// The raw text is preserved exactly as given (or as declared by the
/// default), so string round-trips are lossless; typed conversion happens
/// in the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundValue {
    /// Declared kind of the owning option.
    pub kind: ValueKind,
    /// Raw bound text; `"true"` for present flags.
    pub text: String,
    /// Whether the binding came from the schema default rather than input.
    pub from_default: bool,
}

/// Programmer misuse of the typed accessors.
///
/// Unlike parse-time diagnostics these are returned as `Err` directly: a
/// caller asking for the wrong type, or for an option the schema never
/// declared in the resolved scope, is a bug in the calling code rather
/// than in the user's input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Requested type is inconsistent with the option's declared kind.
    #[error("option '{option}' is declared {declared}, not {requested}")]
    TypeMismatch {
        option: String,
        declared: ValueKind,
        requested: &'static str,
    },
    /// The name is not declared anywhere in the resolved scope.
    #[error("option '{0}' is not declared in the resolved scope")]
    UnknownOption(String),
}

/// The immutable result of one parse call.
///
/// Produced by [`parse`](crate::parse); read-only thereafter. Bound values
/// are keyed by the option's canonical long name regardless of whether the
/// input used the long or short form.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResult {
    pub(crate) path: Vec<String>,
    pub(crate) bound: BTreeMap<String, BoundValue>,
    pub(crate) positionals: Vec<String>,
    pub(crate) diagnostics: Vec<Diagnostic>,
    /// Effective scope the parse resolved to: canonical name → kind.
    /// Lets accessors tell "unbound" apart from "never declared".
    pub(crate) declared: BTreeMap<String, ValueKind>,
}

impl ParsedResult {
    /// Resolved subcommand path, root to leaf, excluding the program name.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The leaf subcommand name, if any subcommand was matched.
    pub fn leaf(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Leftover positional arguments, in input order.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// All collected diagnostics, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether parsing succeeded: no `Error`-severity diagnostics.
    pub fn ok(&self) -> bool {
        self.diagnostics
            .iter()
            .all(|d| d.severity != Severity::Error)
    }

    /// Whether the option is bound (explicitly or via its default).
    pub fn is_set(&self, name: &str) -> bool {
        self.bound.contains_key(name)
    }

    /// Raw bound value for an option, if any.
    pub fn get(&self, name: &str) -> Option<&BoundValue> {
        self.bound.get(name)
    }

    /// Typed accessor for a presence flag.
    ///
    /// Returns whether the flag was given. Fails with
    /// [`AccessError::TypeMismatch`] if the option is not declared as a
    /// flag, or [`AccessError::UnknownOption`] if it is not declared at
    /// all.
    pub fn get_flag(&self, name: &str) -> Result<bool, AccessError> {
        self.expect_kind(name, ValueKind::Flag, "flag")?;
        Ok(self.bound.contains_key(name))
    }

    /// Typed accessor for the raw text of an arity-1 option.
    ///
    /// Valid for every value-taking kind (the text is preserved exactly as
    /// given); only flags reject it.
    pub fn get_str(&self, name: &str) -> Result<Option<&str>, AccessError> {
        let declared = self.declared_kind(name)?;
        if declared == ValueKind::Flag {
            return Err(AccessError::TypeMismatch {
                option: name.to_string(),
                declared,
                requested: "str",
            });
        }
        Ok(self.bound.get(name).map(|v| v.text.as_str()))
    }

    /// Typed accessor for an integer option.
    ///
    /// A bound value that failed to parse at dispatch time (already
    /// reported as an `invalid_value` diagnostic) yields `Ok(None)`;
    /// accessors never re-raise parse-time problems.
    pub fn get_int(&self, name: &str) -> Result<Option<i64>, AccessError> {
        self.expect_kind(name, ValueKind::Int, "int")?;
        Ok(self.bound.get(name).and_then(|v| v.text.parse().ok()))
    }

    /// Typed accessor for an explicit boolean option.
    pub fn get_bool(&self, name: &str) -> Result<Option<bool>, AccessError> {
        self.expect_kind(name, ValueKind::Bool, "bool")?;
        Ok(self.bound.get(name).and_then(|v| v.text.parse().ok()))
    }

    fn declared_kind(&self, name: &str) -> Result<ValueKind, AccessError> {
        self.declared
            .get(name)
            .copied()
            .ok_or_else(|| AccessError::UnknownOption(name.to_string()))
    }

    fn expect_kind(
        &self,
        name: &str,
        expected: ValueKind,
        requested: &'static str,
    ) -> Result<(), AccessError> {
        let declared = self.declared_kind(name)?;
        if declared != expected {
            return Err(AccessError::TypeMismatch {
                option: name.to_string(),
                declared,
                requested,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(
        bound: &[(&str, ValueKind, &str)],
        declared: &[(&str, ValueKind)],
    ) -> ParsedResult {
        ParsedResult {
            path: Vec::new(),
            bound: bound
                .iter()
                .map(|(name, kind, text)| {
                    (
                        name.to_string(),
                        BoundValue {
                            kind: *kind,
                            text: text.to_string(),
                            from_default: false,
                        },
                    )
                })
                .collect(),
            positionals: Vec::new(),
            diagnostics: Vec::new(),
            declared: declared
                .iter()
                .map(|(name, kind)| (name.to_string(), *kind))
                .collect(),
        }
    }

    #[test]
    fn test_typed_accessors() {
        let result = result_with(
            &[
                ("force", ValueKind::Flag, "true"),
                ("port", ValueKind::Int, "8080"),
                ("cache", ValueKind::Bool, "false"),
                ("remote", ValueKind::Str, "origin"),
            ],
            &[
                ("force", ValueKind::Flag),
                ("port", ValueKind::Int),
                ("cache", ValueKind::Bool),
                ("remote", ValueKind::Str),
            ],
        );

        assert_eq!(result.get_flag("force"), Ok(true));
        assert_eq!(result.get_int("port"), Ok(Some(8080)));
        assert_eq!(result.get_bool("cache"), Ok(Some(false)));
        assert_eq!(result.get_str("remote"), Ok(Some("origin")));
    }

    #[test]
    fn test_unbound_declared_option_reads_as_absent() {
        let result = result_with(&[], &[("remote", ValueKind::Str), ("force", ValueKind::Flag)]);

        assert_eq!(result.get_str("remote"), Ok(None));
        assert_eq!(result.get_flag("force"), Ok(false));
        assert!(!result.is_set("remote"));
    }

    #[test]
    fn test_type_mismatch_is_an_access_error() {
        let result = result_with(
            &[("remote", ValueKind::Str, "origin")],
            &[("remote", ValueKind::Str)],
        );

        let err = result.get_int("remote").unwrap_err();
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                option: "remote".to_string(),
                declared: ValueKind::Str,
                requested: "int",
            }
        );

        // get_str on a flag is the inverse mismatch.
        let result = result_with(&[], &[("force", ValueKind::Flag)]);
        assert!(matches!(
            result.get_str("force"),
            Err(AccessError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_undeclared_option_is_an_access_error() {
        let result = result_with(&[], &[]);
        assert_eq!(
            result.get_flag("nope"),
            Err(AccessError::UnknownOption("nope".to_string()))
        );
    }

    #[test]
    fn test_ok_ignores_warnings() {
        let mut result = result_with(&[], &[]);
        result.diagnostics.push(Diagnostic::warning(
            DiagnosticKind::UnknownOption,
            "--woops",
            "unknown option",
        ));
        assert!(result.ok());

        result.diagnostics.push(Diagnostic::error(
            DiagnosticKind::MissingValue,
            "remote",
            "expected a value",
        ));
        assert!(!result.ok());
    }
}
