//! Schema-driven argument parsing engine.
//!
//! This crate is the runtime half of argot: it consumes an immutable
//! [`Schema`](argot_core::Schema) (built once by `argot-core`) and a raw
//! argument list, and produces an immutable [`ParsedResult`].
//!
//! Pipeline: raw arguments → [`scanner::scan`] → token sequence →
//! [`dispatch`](dispatch::dispatch) → [`ParsedResult`].
//!
//! Parsing is a pure, single-threaded, O(n) computation with one token of
//! lookahead and no backtracking. The schema is taken by shared reference
//! and never mutated, so one schema can serve concurrent parse calls from
//! many threads; every call returns an independent result.
//!
//! Parse-time problems (unknown options, missing values, unmet required
//! options) are collected as [`Diagnostic`]s inside the result instead of
//! being returned as errors, so a caller sees everything wrong with the
//! input at once and decides policy itself. The only `Err`-returning
//! surface is the typed accessors on [`ParsedResult`], where a type
//! mismatch is a bug in the calling code.
//!
//! # Example
//!
//! ```
//! use argot_core::{OptionSpec, SchemaBuilder, SubcommandSpec, ValueKind};
//! use argot_engine::parse;
//!
//! let schema = SchemaBuilder::new("git")
//!     .global(OptionSpec::flag("verbose").short('v'))
//!     .subcommand(
//!         SubcommandSpec::new("push")
//!             .with_option(OptionSpec::with_value("remote", ValueKind::Str).required())
//!             .with_option(OptionSpec::flag("force").short('f')),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let args: Vec<String> = ["push", "--remote=origin", "-f", "main"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let result = parse(&schema, &args);
//! assert!(result.ok());
//! assert_eq!(result.path(), ["push"]);
//! assert_eq!(result.get_str("remote").unwrap(), Some("origin"));
//! assert!(result.get_flag("force").unwrap());
//! assert_eq!(result.positionals(), ["main"]);
//! ```

pub mod dispatch;
pub mod result;
pub mod scanner;

pub use dispatch::{ParseOptions, parse, parse_with};
pub use result::{AccessError, BoundValue, Diagnostic, DiagnosticKind, ParsedResult, Severity};
pub use scanner::{ScanError, Token, scan};
