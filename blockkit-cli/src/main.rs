// Command-line interface for blockkit
//
// md2blockkit reads a Markdown document and prints the equivalent Slack Block Kit
// layout as JSON, ready to be posted as the `blocks` of a message.
//
// Usage:
//  md2blockkit [<input>] [--config <path>] [--pretty] [--debug]
//
// Input is a file path; when omitted (or "-") the document is read from stdin.
// Configuration is layered: built-in defaults, then ./blockkit.toml if present,
// then --config. Command-line flags override all of them.
//
// --debug turns on trace mode in the converter: the parsed tree, every visit and
// the final layout are logged to stderr. Without it, RUST_LOG decides what gets
// logged (warnings only by default).

use blockkit::markdown::markdown_to_layout_with;
use blockkit::{Converter, Layout, ParseOptions};
use blockkit_config::{BlockkitConfig, Loader, CONFIG_FILE_NAME};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const STDIN_MARKER: &str = "-";

fn build_cli() -> Command {
    Command::new("md2blockkit")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(env!("BLOCKKIT_LONG_VERSION"))
        .about("Convert Markdown to Slack Block Kit JSON")
        .long_about(
            "md2blockkit converts a Markdown document into a Slack Block Kit layout.\n\n\
            Headings become header blocks followed by a divider, thematic breaks become\n\
            dividers, and everything else is merged into mrkdwn section blocks.\n\
            Tables, images and raw HTML are dropped.\n\n\
            Examples:\n  \
            md2blockkit notes.md                 # Convert a file\n  \
            cat notes.md | md2blockkit           # Convert stdin\n  \
            md2blockkit notes.md --pretty        # Indented JSON\n  \
            md2blockkit notes.md --debug         # Log the tree and each step to stderr",
        )
        .arg(
            Arg::new("input")
                .help("Markdown file to convert ('-' or omitted reads stdin)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a blockkit.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the JSON output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Log the Markdown tree and every conversion step to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let debug_mode = matches.get_flag("debug");
    init_logging(debug_mode);

    let config = load_cli_config(&matches);
    let input = matches.get_one::<String>("input").map(|s| s.as_str());
    let source = read_input(input);

    let options = ParseOptions::from(&config.parse);
    debug!(?options, pretty = config.output.pretty, "configuration loaded");

    // ParseConfig only exposes extensions the converter understands, so an
    // unsupported node cannot come out of the parser here.
    let converter = Converter::new().trace(debug_mode);
    let layout = markdown_to_layout_with(&source, &options, converter).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    let json = render(&layout, config.output.pretty).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

/// --debug forces verbose logging, otherwise RUST_LOG applies (default: warn).
fn init_logging(debug_mode: bool) {
    let filter = if debug_mode {
        EnvFilter::new("debug,blockkit=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_cli_config(matches: &ArgMatches) -> BlockkitConfig {
    let loader = Loader::new().with_optional_file(CONFIG_FILE_NAME);
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    let loader = if matches.get_flag("pretty") {
        loader.set_override("output.pretty", true)
    } else {
        Ok(loader)
    };

    loader.and_then(Loader::build).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn read_input(input: Option<&str>) -> String {
    match input {
        None | Some(STDIN_MARKER) => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            });
            source
        }
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{path}': {e}");
            std::process::exit(1);
        }),
    }
}

fn render(layout: &Layout, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(layout)
    } else {
        serde_json::to_string(layout)
    }
}
