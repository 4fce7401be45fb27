//! Core schema model and registry for schema-driven argument parsing.
//!
//! This crate defines the declarative half of the argot parser:
//!
//! - [`OptionSpec`] — an option/flag with a long name, optional short
//!   alias, value kind, default, and required marker.
//! - [`SubcommandSpec`] — a subcommand with its own options and nested
//!   subcommands (a tree of arbitrary depth).
//! - [`Schema`] — the finalized, immutable registry of global options plus
//!   the subcommand tree, produced once by [`SchemaBuilder::build`].
//!
//! Validation catches structural errors (duplicate names or aliases within
//! a scope, malformed names, contradictory defaults, subcommand cycles) at
//! build time and aborts with a [`SchemaError`], so a `Schema` value in
//! hand is valid by construction and no input is ever parsed against a
//! broken declaration.
//!
//! The runtime half (token scanning, dispatch, and the parsed result
//! model) lives in the `argot-engine` crate.
//!
//! # Example
//!
//! ```
//! use argot_core::*;
//!
//! let schema = SchemaBuilder::new("git")
//!     .describe("The stupid content tracker")
//!     .global(OptionSpec::flag("verbose").short('v').describe("Verbose output"))
//!     .subcommand(
//!         SubcommandSpec::new("push")
//!             .with_option(OptionSpec::with_value("remote", ValueKind::Str).required())
//!             .with_option(OptionSpec::flag("force").short('f')),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schema.program(), "git");
//! assert!(schema.find_subcommand("push").unwrap().find_long("remote").is_some());
//! ```

mod schema;
mod types;
mod validate;

pub use schema::{Schema, SchemaBuilder};
pub use types::{OptionSpec, SubcommandSpec, ValueKind};
pub use validate::SchemaError;
