//! Finalized, immutable schemas and the builder that produces them.
//!
//! A [`Schema`] is the read-only contract handed to the parsing engine: the
//! program's global options plus its subcommand tree. It can only be
//! produced by [`SchemaBuilder::build`], which validates every structural
//! invariant first, so a `Schema` value is valid by construction.
//!
//! Schemas hold no interior mutability and are `Send + Sync`; a single
//! schema can back concurrent parse calls from many threads.

use serde::Serialize;

use crate::validate::validate_tree;
use crate::{OptionSpec, SchemaError, SubcommandSpec};

/// A finalized, immutable parsing schema.
///
/// All fields are private; read access goes through methods and no method
/// mutates. Construct one with [`SchemaBuilder`].
///
/// # Examples
///
/// ```
/// use argot_core::{OptionSpec, SchemaBuilder, SubcommandSpec, ValueKind};
///
/// let schema = SchemaBuilder::new("git")
///     .global(OptionSpec::flag("verbose").short('v'))
///     .subcommand(
///         SubcommandSpec::new("push")
///             .with_option(OptionSpec::with_value("remote", ValueKind::Str).required()),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.program(), "git");
/// assert!(schema.find_subcommand("push").is_some());
/// assert!(schema.find_global_long("verbose").is_some());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    program: String,
    description: Option<String>,
    globals: Vec<OptionSpec>,
    subcommands: Vec<SubcommandSpec>,
}

impl Schema {
    /// The program name (root of the subcommand tree).
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The program description, if declared.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Global options, visible in every subcommand scope.
    pub fn globals(&self) -> &[OptionSpec] {
        &self.globals
    }

    /// Top-level subcommands.
    pub fn subcommands(&self) -> &[SubcommandSpec] {
        &self.subcommands
    }

    /// Finds a top-level subcommand by name or alias.
    pub fn find_subcommand(&self, name: &str) -> Option<&SubcommandSpec> {
        self.subcommands
            .iter()
            .find(|s| s.name == name || s.aliases.iter().any(|a| a == name))
    }

    /// Finds a global option by long name.
    pub fn find_global_long(&self, name: &str) -> Option<&OptionSpec> {
        self.globals.iter().find(|o| o.matches_long(name))
    }

    /// Finds a global option by short alias.
    pub fn find_global_short(&self, alias: char) -> Option<&OptionSpec> {
        self.globals.iter().find(|o| o.matches_short(alias))
    }

    /// Resolves a root-to-leaf subcommand path to its spec.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{SchemaBuilder, SubcommandSpec};
    ///
    /// let schema = SchemaBuilder::new("git")
    ///     .subcommand(SubcommandSpec::new("remote").with_subcommand(SubcommandSpec::new("add")))
    ///     .build()
    ///     .unwrap();
    ///
    /// let add = schema.resolve(&["remote".into(), "add".into()]).unwrap();
    /// assert_eq!(add.name, "add");
    /// assert!(schema.resolve(&["remote".into(), "drop".into()]).is_none());
    /// ```
    pub fn resolve(&self, path: &[String]) -> Option<&SubcommandSpec> {
        let mut segments = path.iter();
        let mut current = self.find_subcommand(segments.next()?)?;
        for segment in segments {
            current = current.find_subcommand(segment)?;
        }
        Some(current)
    }
}

/// Builder for [`Schema`] values.
///
/// Registration is free-form chaining; every structural rule is checked in
/// one pass by [`build`](SchemaBuilder::build), which returns the first
/// [`SchemaError`] found. Schema errors are programmer errors and abort the
/// build before any command-line input is processed.
///
/// # Examples
///
/// ```
/// use argot_core::{OptionSpec, SchemaBuilder, SchemaError, SubcommandSpec};
///
/// // Duplicate global name → build fails fast.
/// let err = SchemaBuilder::new("tool")
///     .global(OptionSpec::flag("quiet"))
///     .global(OptionSpec::flag("quiet"))
///     .build()
///     .unwrap_err();
/// assert!(matches!(err, SchemaError::DuplicateName { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    program: String,
    description: Option<String>,
    globals: Vec<OptionSpec>,
    subcommands: Vec<SubcommandSpec>,
}

impl SchemaBuilder {
    /// Starts a schema for the given program name.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            ..Default::default()
        }
    }

    /// Adds a program description, shown in help output.
    pub fn describe(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Registers a global option, visible in every subcommand scope.
    pub fn global(mut self, opt: OptionSpec) -> Self {
        self.globals.push(opt);
        self
    }

    /// Registers a top-level subcommand (with its own nested tree).
    pub fn subcommand(mut self, sub: SubcommandSpec) -> Self {
        self.subcommands.push(sub);
        self
    }

    /// Validates the declaration and finalizes it into an immutable
    /// [`Schema`].
    ///
    /// Fails with the first [`SchemaError`] found; a partial schema is
    /// never returned.
    pub fn build(self) -> Result<Schema, SchemaError> {
        validate_tree(&self.program, &self.globals, &self.subcommands)?;
        Ok(Schema {
            program: self.program,
            description: self.description,
            globals: self.globals,
            subcommands: self.subcommands,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueKind;

    fn git_schema() -> Schema {
        SchemaBuilder::new("git")
            .describe("The stupid content tracker")
            .global(OptionSpec::flag("verbose").short('v'))
            .subcommand(
                SubcommandSpec::new("push")
                    .with_option(OptionSpec::with_value("remote", ValueKind::Str).required()),
            )
            .subcommand(
                SubcommandSpec::new("remote")
                    .with_subcommand(SubcommandSpec::new("add"))
                    .with_subcommand(SubcommandSpec::new("remove").alias("rm")),
            )
            .build()
            .expect("schema should build")
    }

    #[test]
    fn test_build_and_lookups() {
        let schema = git_schema();

        assert_eq!(schema.program(), "git");
        assert_eq!(schema.description(), Some("The stupid content tracker"));
        assert!(schema.find_subcommand("push").is_some());
        assert!(schema.find_subcommand("clone").is_none());
        assert!(schema.find_global_long("verbose").is_some());
        assert!(schema.find_global_short('v').is_some());
    }

    #[test]
    fn test_resolve_nested_path() {
        let schema = git_schema();

        let add = schema.resolve(&["remote".into(), "add".into()]);
        assert_eq!(add.map(|s| s.name.as_str()), Some("add"));

        // Alias resolution works at every level.
        let rm = schema.resolve(&["remote".into(), "rm".into()]);
        assert_eq!(rm.map(|s| s.name.as_str()), Some("remove"));

        assert!(schema.resolve(&["push".into(), "deep".into()]).is_none());
    }

    #[test]
    fn test_build_rejects_invalid_tree() {
        let err = SchemaBuilder::new("git")
            .subcommand(SubcommandSpec::new("push"))
            .subcommand(SubcommandSpec::new("push"))
            .build()
            .unwrap_err();

        assert!(matches!(err, SchemaError::DuplicateName { .. }));
    }

    #[test]
    fn test_schema_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
    }
}
