//! Spec type definitions for the argument-parsing data model.
//!
//! This module defines the declarative side of the parser: options, flags,
//! and subcommands as the schema author writes them. The types are designed
//! for serialization with [`serde`] and round-trip through JSON.
//!
//! Specs are plain data. All structural rules (unique names, valid aliases,
//! sane defaults) are enforced when the specs are assembled into a
//! [`Schema`](crate::Schema), not here.

use serde::{Deserialize, Serialize};

/// Declared value kind of an option.
///
/// The kind determines the option's arity: [`Flag`](ValueKind::Flag)
/// consumes no value (presence means `true`), every other kind consumes
/// exactly one value token.
///
/// # Examples
///
/// ```
/// use argot_core::ValueKind;
///
/// assert_eq!(ValueKind::Flag.arity(), 0);
/// assert_eq!(ValueKind::Int.arity(), 1);
/// assert!(ValueKind::Int.accepts("42"));
/// assert!(!ValueKind::Int.accepts("forty-two"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Boolean presence flag (arity 0).
    Flag,
    /// Explicit boolean value, `true` or `false` (arity 1).
    Bool,
    /// Signed integer value (arity 1).
    Int,
    /// Free-form string value (arity 1, the default).
    #[default]
    Str,
}

impl ValueKind {
    /// Number of value tokens this kind consumes (0 or 1).
    pub fn arity(&self) -> usize {
        match self {
            Self::Flag => 0,
            Self::Bool | Self::Int | Self::Str => 1,
        }
    }

    /// Checks whether `text` is a well-formed value for this kind.
    ///
    /// `Flag` accepts no text at all; `Bool` accepts exactly `true` or
    /// `false`; `Int` accepts anything `i64` parses; `Str` accepts
    /// everything.
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Self::Flag => false,
            Self::Bool => text == "true" || text == "false",
            Self::Int => text.parse::<i64>().is_ok(),
            Self::Str => true,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "flag"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Str => write!(f, "str"),
        }
    }
}

/// Spec for a single command-line option.
///
/// An option has a long name (stored without the leading `--`), an optional
/// single-character short alias, a [`ValueKind`], and optional metadata:
/// default value, required marker, and a help description.
///
/// Use the constructors [`flag`](OptionSpec::flag) and
/// [`with_value`](OptionSpec::with_value), then chain builder methods.
/// Specs are immutable once the owning schema is built.
///
/// # Examples
///
/// ```
/// use argot_core::{OptionSpec, ValueKind};
///
/// let verbose = OptionSpec::flag("verbose")
///     .short('v')
///     .describe("Enable verbose output");
/// assert_eq!(verbose.kind, ValueKind::Flag);
///
/// let remote = OptionSpec::with_value("remote", ValueKind::Str).required();
/// assert!(remote.required);
/// assert!(remote.matches_long("remote"));
/// assert!(!remote.matches_short('r'));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Long name without dashes (e.g. "message" for `--message`).
    pub name: String,
    /// Single-character short alias (e.g. 'm' for `-m`).
    pub short: Option<char>,
    /// What kind of value the option takes, if any.
    pub kind: ValueKind,
    /// Default value text, applied when the option is not given.
    pub default: Option<String>,
    /// Must be bound by the end of a parse.
    pub required: bool,
    /// Description shown in help output.
    pub description: Option<String>,
}

impl OptionSpec {
    /// Creates a presence flag (arity 0).
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{OptionSpec, ValueKind};
    ///
    /// let force = OptionSpec::flag("force").short('f');
    /// assert_eq!(force.kind, ValueKind::Flag);
    /// assert!(!force.required);
    /// ```
    pub fn flag(name: &str) -> Self {
        Self {
            name: name.to_string(),
            short: None,
            kind: ValueKind::Flag,
            default: None,
            required: false,
            description: None,
        }
    }

    /// Creates an option that takes a single value of the given kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{OptionSpec, ValueKind};
    ///
    /// let port = OptionSpec::with_value("port", ValueKind::Int);
    /// assert_eq!(port.kind.arity(), 1);
    /// ```
    pub fn with_value(name: &str, kind: ValueKind) -> Self {
        Self {
            name: name.to_string(),
            short: None,
            kind,
            default: None,
            required: false,
            description: None,
        }
    }

    /// Adds a short alias.
    pub fn short(mut self, alias: char) -> Self {
        self.short = Some(alias);
        self
    }

    /// Marks the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a default value, bound when the option is not given.
    pub fn default_value(mut self, text: &str) -> Self {
        self.default = Some(text.to_string());
        self
    }

    /// Adds a help description.
    pub fn describe(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Checks whether `name` is this option's long name.
    pub fn matches_long(&self, name: &str) -> bool {
        self.name == name
    }

    /// Checks whether `alias` is this option's short alias.
    pub fn matches_short(&self, alias: char) -> bool {
        self.short == Some(alias)
    }
}

/// Spec for a subcommand.
///
/// Subcommands form a tree of arbitrary depth (e.g. `remote add`). Each
/// node owns its options and its nested subcommands; a node's options are
/// visible to the node itself and to every descendant, so they act as
/// globals for the subtree below it.
///
/// # Examples
///
/// ```
/// use argot_core::{OptionSpec, SubcommandSpec, ValueKind};
///
/// let push = SubcommandSpec::new("push")
///     .describe("Update remote refs")
///     .with_option(OptionSpec::with_value("remote", ValueKind::Str).required())
///     .with_option(OptionSpec::flag("force").short('f'));
///
/// assert_eq!(push.name, "push");
/// assert_eq!(push.options.len(), 2);
/// assert!(push.find_long("remote").is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubcommandSpec {
    /// Name of the subcommand.
    pub name: String,
    /// Short description shown in help output.
    pub description: Option<String>,
    /// Options owned by this subcommand.
    pub options: Vec<OptionSpec>,
    /// Nested subcommands.
    pub subcommands: Vec<SubcommandSpec>,
    /// Alternate names for this subcommand.
    pub aliases: Vec<String>,
}

impl SubcommandSpec {
    /// Creates a new subcommand spec with the given name.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::SubcommandSpec;
    ///
    /// let pull = SubcommandSpec::new("pull");
    /// assert_eq!(pull.name, "pull");
    /// assert!(pull.options.is_empty());
    /// ```
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Adds a help description.
    pub fn describe(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds an option to this subcommand.
    pub fn with_option(mut self, opt: OptionSpec) -> Self {
        self.options.push(opt);
        self
    }

    /// Adds a nested subcommand.
    pub fn with_subcommand(mut self, sub: SubcommandSpec) -> Self {
        self.subcommands.push(sub);
        self
    }

    /// Adds an alternate name.
    pub fn alias(mut self, name: &str) -> Self {
        self.aliases.push(name.to_string());
        self
    }

    /// Finds a direct child subcommand by name or alias.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::SubcommandSpec;
    ///
    /// let remote = SubcommandSpec::new("remote")
    ///     .with_subcommand(SubcommandSpec::new("add").alias("new"));
    ///
    /// assert!(remote.find_subcommand("add").is_some());
    /// assert!(remote.find_subcommand("new").is_some());
    /// assert!(remote.find_subcommand("drop").is_none());
    /// ```
    pub fn find_subcommand(&self, name: &str) -> Option<&SubcommandSpec> {
        self.subcommands
            .iter()
            .find(|s| s.name == name || s.aliases.iter().any(|a| a == name))
    }

    /// Finds an owned option by long name.
    pub fn find_long(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.matches_long(name))
    }

    /// Finds an owned option by short alias.
    pub fn find_short(&self, alias: char) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.matches_short(alias))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_spec_creation() {
        let flag = OptionSpec::flag("verbose")
            .short('v')
            .describe("Enable verbose output");

        assert_eq!(flag.name, "verbose");
        assert_eq!(flag.short, Some('v'));
        assert_eq!(flag.kind, ValueKind::Flag);
        assert!(!flag.required);
    }

    #[test]
    fn test_value_option_defaults_and_required() {
        let opt = OptionSpec::with_value("retries", ValueKind::Int).default_value("3");
        assert_eq!(opt.default.as_deref(), Some("3"));

        let opt = OptionSpec::with_value("remote", ValueKind::Str).required();
        assert!(opt.required);
    }

    #[test]
    fn test_kind_accepts() {
        assert!(ValueKind::Bool.accepts("true"));
        assert!(!ValueKind::Bool.accepts("yes"));
        assert!(ValueKind::Int.accepts("-17"));
        assert!(!ValueKind::Int.accepts("1.5"));
        assert!(ValueKind::Str.accepts(""));
        assert!(!ValueKind::Flag.accepts("true"));
    }

    #[test]
    fn test_subcommand_lookup_by_alias() {
        let spec = SubcommandSpec::new("remote")
            .with_subcommand(SubcommandSpec::new("remove").alias("rm"));

        assert!(spec.find_subcommand("remove").is_some());
        assert!(spec.find_subcommand("rm").is_some());
        assert!(spec.find_subcommand("add").is_none());
    }

    #[test]
    fn test_option_lookup() {
        let spec = SubcommandSpec::new("push")
            .with_option(OptionSpec::with_value("remote", ValueKind::Str))
            .with_option(OptionSpec::flag("force").short('f'));

        assert!(spec.find_long("remote").is_some());
        assert!(spec.find_short('f').is_some());
        assert!(spec.find_short('x').is_none());
    }
}
