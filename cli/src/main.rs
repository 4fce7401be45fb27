use std::env;
use std::io::IsTerminal;

use argot_core::{OptionSpec, Schema, SchemaBuilder, SchemaError, SubcommandSpec, ValueKind};
use argot_engine::{ParsedResult, Severity, parse};

mod help;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit code for rejected input, distinct from handler failure codes.
const EXIT_PARSE_FAILURE: i32 = 2;

type Handler = fn(&ParsedResult) -> i32;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let schema = match demo_schema() {
        Ok(schema) => schema,
        Err(err) => {
            eprintln!("schema error: {err}");
            return 1;
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let result = parse(&schema, &args);

    // Help and version win over everything, including parse problems, so
    // `argot push --help` works without a --remote.
    if result.get_flag("help").unwrap_or(false) {
        print!("{}", help::render(&schema, use_color()));
        return 0;
    }
    if result.get_flag("version").unwrap_or(false) {
        println!("argot {PACKAGE_VERSION}");
        return 0;
    }

    for diag in result.diagnostics() {
        match diag.severity {
            Severity::Error => eprintln!("error: {diag}"),
            Severity::Warning => eprintln!("warning: {diag}"),
        }
    }
    if !result.ok() {
        eprintln!("run 'argot --help' for usage");
        return EXIT_PARSE_FAILURE;
    }

    if result.get_flag("json").unwrap_or(false) {
        return match serde_json::to_string_pretty(&result) {
            Ok(json) => {
                println!("{json}");
                0
            }
            Err(err) => {
                eprintln!("error: failed to serialize result: {err}");
                1
            }
        };
    }

    run_handler(&schema, &result)
}

/// The demonstration schema: a small git-like surface.
fn demo_schema() -> Result<Schema, SchemaError> {
    SchemaBuilder::new("argot")
        .describe("Demonstration CLI for the argot parsing engine")
        .global(OptionSpec::flag("help").short('h').describe("Print help"))
        .global(OptionSpec::flag("version").short('V').describe("Print version"))
        .global(OptionSpec::flag("verbose").short('v').describe("Enable verbose output"))
        .global(OptionSpec::flag("json").describe("Print the parsed result as JSON"))
        .subcommand(
            SubcommandSpec::new("push")
                .describe("Update remote refs")
                .with_option(
                    OptionSpec::with_value("remote", ValueKind::Str)
                        .required()
                        .describe("Destination remote"),
                )
                .with_option(OptionSpec::flag("force").short('f').describe("Force update")),
        )
        .subcommand(
            SubcommandSpec::new("pull")
                .describe("Fetch and integrate from a remote")
                .with_option(
                    OptionSpec::with_value("depth", ValueKind::Int)
                        .default_value("0")
                        .describe("History depth, 0 for full"),
                ),
        )
        .subcommand(
            SubcommandSpec::new("remote")
                .describe("Manage tracked remotes")
                .with_subcommand(
                    SubcommandSpec::new("add")
                        .describe("Add a remote")
                        .with_option(
                            OptionSpec::with_value("track", ValueKind::Str)
                                .describe("Branch to track"),
                        ),
                )
                .with_subcommand(
                    SubcommandSpec::new("remove")
                        .alias("rm")
                        .describe("Remove a remote"),
                ),
        )
        .build()
}

fn handlers() -> &'static [(&'static str, Handler)] {
    &[
        ("push", handle_push),
        ("pull", handle_pull),
        ("remote add", handle_remote_add),
        ("remote remove", handle_remote_remove),
    ]
}

/// Runs the handler for the resolved subcommand path. No path, or a path
/// with no handler (e.g. `remote` alone), falls back to help.
fn run_handler(schema: &Schema, result: &ParsedResult) -> i32 {
    let key = result.path().join(" ");
    match handlers().iter().find(|(name, _)| *name == key) {
        Some((_, handler)) => handler(result),
        None => {
            print!("{}", help::render(schema, use_color()));
            0
        }
    }
}

fn handle_push(result: &ParsedResult) -> i32 {
    let remote = result.get_str("remote").ok().flatten().unwrap_or("origin");
    if result.get_flag("force").unwrap_or(false) {
        println!("force-pushing to {remote}");
    } else {
        println!("pushing to {remote}");
    }
    0
}

fn handle_pull(result: &ParsedResult) -> i32 {
    match result.get_int("depth").ok().flatten() {
        Some(0) | None => println!("pulling full history"),
        Some(depth) => println!("pulling with depth {depth}"),
    }
    0
}

fn handle_remote_add(result: &ParsedResult) -> i32 {
    let mut positionals = result.positionals().iter();
    let (Some(name), Some(url)) = (positionals.next(), positionals.next()) else {
        eprintln!("error: 'remote add' expects a name and a url");
        return 1;
    };
    match result.get_str("track").ok().flatten() {
        Some(branch) => println!("added remote {name} ({url}), tracking {branch}"),
        None => println!("added remote {name} ({url})"),
    }
    0
}

fn handle_remote_remove(result: &ParsedResult) -> i32 {
    let Some(name) = result.positionals().first() else {
        eprintln!("error: 'remote remove' expects a remote name");
        return 1;
    };
    println!("removed remote {name}");
    0
}

fn use_color() -> bool {
    std::io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none()
}
