//! Help text rendering for a schema.
//!
//! Renders a two-column layout: names on the left, padded to the longest
//! name in the tree, descriptions on the right. Subcommands indent two
//! spaces per nesting level. Color is plain ANSI escapes gated behind a
//! flag, so non-TTY output stays clean.

use argot_core::{OptionSpec, Schema, SubcommandSpec};

mod color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD_WHITE: &str = "\x1b[1;97m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

const COMMAND_INDENT: usize = 4;
const OPTION_EXTRA_INDENT: usize = 2;
const LEVEL_INDENT: usize = 2;

/// Renders the full help text for a schema.
pub fn render(schema: &Schema, use_color: bool) -> String {
    let width = layout_width(schema);
    let mut out = String::new();

    match schema.description() {
        Some(desc) => out.push_str(&format!(
            "{} - {desc}\n\n",
            paint(schema.program(), color::BOLD_WHITE, use_color)
        )),
        None => out.push_str(&format!(
            "{}\n\n",
            paint(schema.program(), color::BOLD_WHITE, use_color)
        )),
    }

    if !schema.globals().is_empty() {
        out.push_str("Global options:\n");
        for opt in schema.globals() {
            push_option_row(&mut out, opt, COMMAND_INDENT, width, use_color);
        }
        out.push('\n');
    }

    if !schema.subcommands().is_empty() {
        out.push_str("Commands:\n");
        for sub in schema.subcommands() {
            push_command_rows(&mut out, sub, 0, width, use_color);
        }
        out.push('\n');
    }

    out
}

fn push_command_rows(
    out: &mut String,
    sub: &SubcommandSpec,
    depth: usize,
    width: usize,
    use_color: bool,
) {
    let indent = COMMAND_INDENT + depth * LEVEL_INDENT;
    let label = command_label(sub);
    let painted = paint(&label, color::YELLOW, use_color);
    match &sub.description {
        Some(desc) => {
            out.push_str(&format!(
                "{:indent$}{painted}{:pad$} - {desc}\n",
                "",
                "",
                pad = width - indent - label.len()
            ));
        }
        None => out.push_str(&format!("{:indent$}{painted}\n", "")),
    }

    for opt in &sub.options {
        push_option_row(out, opt, indent + OPTION_EXTRA_INDENT, width, use_color);
    }
    for child in &sub.subcommands {
        push_command_rows(out, child, depth + 1, width, use_color);
    }
}

fn push_option_row(out: &mut String, opt: &OptionSpec, indent: usize, width: usize, use_color: bool) {
    let label = option_label(opt);
    let painted = paint(&label, color::CYAN, use_color);
    match &opt.description {
        Some(desc) => out.push_str(&format!(
            "{:indent$}{painted}{:pad$} - {desc}\n",
            "",
            "",
            pad = width - indent - label.len()
        )),
        None => out.push_str(&format!("{:indent$}{painted}\n", "")),
    }
}

fn command_label(sub: &SubcommandSpec) -> String {
    if sub.aliases.is_empty() {
        sub.name.clone()
    } else {
        format!("{} ({})", sub.name, sub.aliases.join(", "))
    }
}

fn option_label(opt: &OptionSpec) -> String {
    let mut label = format!("--{}", opt.name);
    if let Some(alias) = opt.short {
        label.push_str(&format!(", -{alias}"));
    }
    if opt.kind.arity() == 1 {
        label.push_str(&format!(" <{}>", opt.kind));
    }
    label
}

/// Width of the name column: the longest indented label in the tree.
fn layout_width(schema: &Schema) -> usize {
    let mut width = 0;
    for opt in schema.globals() {
        width = width.max(COMMAND_INDENT + option_label(opt).len());
    }
    for sub in schema.subcommands() {
        width = width.max(subtree_width(sub, 0));
    }
    width
}

fn subtree_width(sub: &SubcommandSpec, depth: usize) -> usize {
    let indent = COMMAND_INDENT + depth * LEVEL_INDENT;
    let mut width = indent + command_label(sub).len();
    for opt in &sub.options {
        width = width.max(indent + OPTION_EXTRA_INDENT + option_label(opt).len());
    }
    for child in &sub.subcommands {
        width = width.max(subtree_width(child, depth + 1));
    }
    width
}

fn paint(text: &str, code: &str, use_color: bool) -> String {
    if use_color {
        format!("{code}{text}{}", color::RESET)
    } else {
        text.to_string()
    }
}
