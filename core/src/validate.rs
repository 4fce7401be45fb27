//! Build-time schema validation.
//!
//! Validates structural invariants of a schema before it is finalized:
//! duplicate option names or short aliases within a scope (including options
//! inherited from ancestor subcommands), duplicate sibling subcommand names,
//! malformed names and aliases, contradictory default declarations, and
//! subcommand name cycles.
//!
//! Validation is fail-fast: the first problem found aborts the build with a
//! [`SchemaError`]. These are programmer errors in the schema declaration,
//! caught before any command-line input is ever processed.

use std::collections::HashSet;

use thiserror::Error;

use crate::{OptionSpec, SubcommandSpec, ValueKind};

/// Schema declaration errors.
///
/// Each variant describes a specific structural problem found while building
/// a [`Schema`](crate::Schema). The `Display` impl provides a human-readable
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// An option or subcommand has an empty name.
    #[error("empty name in scope '{0}'")]
    EmptyName(String),
    /// Long option name contains dashes, `=`, or whitespace.
    #[error("invalid long option name: '{0}'")]
    InvalidLongName(String),
    /// Short alias is a dash, `=`, or whitespace.
    #[error("invalid short alias for option '{option}': '{alias}'")]
    InvalidShortAlias { option: String, alias: char },
    /// Two options or subcommands collide in name or alias within a scope.
    #[error("duplicate name in scope '{scope}': '{name}'")]
    DuplicateName { scope: String, name: String },
    /// An option is declared both required and defaulted.
    #[error("option '{0}' is required but declares a default")]
    RequiredWithDefault(String),
    /// A default value does not parse under the declared kind.
    #[error("default '{default}' for option '{option}' is not a valid {kind} value")]
    DefaultKindMismatch {
        option: String,
        kind: ValueKind,
        default: String,
    },
    /// A subcommand path repeats a name (e.g. `git remote git`).
    #[error("subcommand cycle detected at path: {0}")]
    CycleDetected(String),
}

/// Validates a whole schema declaration: global options plus the subcommand
/// tree under `program`.
///
/// `longs` and `shorts` accumulate the option names visible in the current
/// scope; descendants inherit their ancestors' options, so a child option
/// colliding with a global is a duplicate.
pub(crate) fn validate_tree(
    program: &str,
    globals: &[OptionSpec],
    subcommands: &[SubcommandSpec],
) -> Result<(), SchemaError> {
    if program.trim().is_empty() {
        return Err(SchemaError::EmptyName("<root>".to_string()));
    }

    let mut longs = HashSet::new();
    let mut shorts = HashSet::new();
    for opt in globals {
        validate_option(program, opt, &mut longs, &mut shorts)?;
    }

    let mut path = vec![program.to_string()];
    validate_subcommands(subcommands, &mut path, &longs, &shorts)
}

fn validate_subcommands(
    subcommands: &[SubcommandSpec],
    path: &mut Vec<String>,
    inherited_longs: &HashSet<String>,
    inherited_shorts: &HashSet<char>,
) -> Result<(), SchemaError> {
    let scope = path.join(" ");
    let mut sibling_names: HashSet<&str> = HashSet::new();

    for sub in subcommands {
        let name = sub.name.trim();
        if name.is_empty() {
            return Err(SchemaError::EmptyName(scope.clone()));
        }

        if !sibling_names.insert(name) {
            return Err(SchemaError::DuplicateName {
                scope: scope.clone(),
                name: name.to_string(),
            });
        }
        for alias in &sub.aliases {
            if !sibling_names.insert(alias.as_str()) {
                return Err(SchemaError::DuplicateName {
                    scope: scope.clone(),
                    name: alias.clone(),
                });
            }
        }

        if path.iter().any(|segment| segment == name) {
            let cycle_path = path
                .iter()
                .cloned()
                .chain(std::iter::once(name.to_string()))
                .collect::<Vec<_>>()
                .join(" ");
            return Err(SchemaError::CycleDetected(cycle_path));
        }

        // Each subtree sees its ancestors' options plus its own.
        let mut longs = inherited_longs.clone();
        let mut shorts = inherited_shorts.clone();
        let own_scope = format!("{scope} {name}");
        for opt in &sub.options {
            validate_option(&own_scope, opt, &mut longs, &mut shorts)?;
        }

        path.push(name.to_string());
        validate_subcommands(&sub.subcommands, path, &longs, &shorts)?;
        path.pop();
    }

    Ok(())
}

fn validate_option(
    scope: &str,
    opt: &OptionSpec,
    longs: &mut HashSet<String>,
    shorts: &mut HashSet<char>,
) -> Result<(), SchemaError> {
    if opt.name.trim().is_empty() {
        return Err(SchemaError::EmptyName(scope.to_string()));
    }

    if opt.name.starts_with('-')
        || opt.name.contains('=')
        || opt.name.chars().any(char::is_whitespace)
    {
        return Err(SchemaError::InvalidLongName(opt.name.clone()));
    }

    if !longs.insert(opt.name.clone()) {
        return Err(SchemaError::DuplicateName {
            scope: scope.to_string(),
            name: opt.name.clone(),
        });
    }

    if let Some(alias) = opt.short {
        if alias == '-' || alias == '=' || alias.is_whitespace() {
            return Err(SchemaError::InvalidShortAlias {
                option: opt.name.clone(),
                alias,
            });
        }
        if !shorts.insert(alias) {
            return Err(SchemaError::DuplicateName {
                scope: scope.to_string(),
                name: format!("-{alias}"),
            });
        }
    }

    if let Some(default) = &opt.default {
        if opt.required {
            return Err(SchemaError::RequiredWithDefault(opt.name.clone()));
        }
        if !opt.kind.accepts(default) {
            return Err(SchemaError::DefaultKindMismatch {
                option: opt.name.clone(),
                kind: opt.kind,
                default: default.clone(),
            });
        }
    }

    Ok(())
}
