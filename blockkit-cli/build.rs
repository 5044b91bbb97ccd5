use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn build_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn long_version(version: &str, commit: Option<String>, date: Option<String>) -> String {
    let details: Vec<String> = [
        commit.map(|commit| format!("commit {commit}")),
        date.map(|date| format!("built {date}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    if details.is_empty() {
        version.to_string()
    } else {
        format!("{version} ({})", details.join(", "))
    }
}

fn main() -> Result<(), Error> {
    // Long version: "<version> (commit <sha>, built <date>)", each part only
    // when it was provided at build time
    println!("cargo:rerun-if-env-changed=BLOCKKIT_COMMIT");
    println!("cargo:rerun-if-env-changed=BLOCKKIT_BUILD_DATE");
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "cargo:rustc-env=BLOCKKIT_LONG_VERSION={}",
        long_version(version, build_env("BLOCKKIT_COMMIT"), build_env("BLOCKKIT_BUILD_DATE"))
    );

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    // Mirror of build_cli() in src/main.rs; build scripts can't reach src/
    let mut cmd = Command::new("md2blockkit")
        .version(version)
        .about("Convert Markdown to Slack Block Kit JSON")
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
        );

    generate_to(Bash, &mut cmd, "md2blockkit", &outdir)?;
    generate_to(Zsh, &mut cmd, "md2blockkit", &outdir)?;
    generate_to(Fish, &mut cmd, "md2blockkit", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
