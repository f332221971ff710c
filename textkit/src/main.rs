//! Iteration and string-manipulation cheatsheet.
//!
//! `textkit demo` prints the full ordered walkthrough; the other
//! subcommands run a single helper on the given arguments.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use textkit::error::TextError;
use textkit::io::config::{TextkitConfig, load_config, write_config};
use textkit::{demo, exit_codes, logging};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "textkit",
    version,
    about = "Iteration and string-manipulation cheatsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every helper in order on the configured samples.
    Demo {
        /// TOML file with sample inputs. Defaults apply if it is missing.
        #[arg(short, long, default_value = "textkit.toml")]
        config: PathBuf,
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Reverse text by code point.
    Reverse {
        text: String,
        /// Reverse by grapheme cluster instead.
        #[arg(long)]
        graphemes: bool,
    },
    /// Print upper, lower, title and swapped case.
    Case { text: String },
    /// Print the code-point offset of SUBSTR in TEXT, or -1.
    Find { text: String, substr: String },
    /// Print every match of PATTERN in TEXT, one per line.
    Matches { pattern: String, text: String },
    /// Print each whitespace-separated word.
    Words { text: String },
    /// Print each newline-separated line.
    Lines { text: String },
    /// Write the default config to PATH.
    InitConfig {
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        let code = match err.downcast_ref::<TextError>() {
            Some(TextError::InvalidPattern { .. }) => exit_codes::INVALID_PATTERN,
            None => exit_codes::INVALID,
        };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Demo { config, json } => cmd_demo(&config, json),
        Command::Reverse { text, graphemes } => {
            if graphemes {
                println!("{}", textkit::reverse_graphemes(&text));
            } else {
                println!("{}", textkit::reverse(&text));
            }
            Ok(())
        }
        Command::Case { text } => {
            let cases = textkit::case_variants(&text);
            println!("upper: {}", cases.upper);
            println!("lower: {}", cases.lower);
            println!("title: {}", cases.title);
            println!("swapped: {}", cases.swapped);
            Ok(())
        }
        Command::Find { text, substr } => {
            match textkit::index_of(&text, &substr) {
                Some(idx) => println!("{idx}"),
                None => println!("-1"),
            }
            Ok(())
        }
        Command::Matches { pattern, text } => {
            for found in textkit::find_all_matches(&pattern, &text)? {
                println!("{found}");
            }
            Ok(())
        }
        Command::Words { text } => {
            print_all(&textkit::split_words(&text));
            Ok(())
        }
        Command::Lines { text } => {
            print_all(&textkit::split_lines(&text));
            Ok(())
        }
        Command::InitConfig { path, force } => cmd_init_config(&path, force),
    }
}

fn cmd_demo(config: &Path, json: bool) -> Result<()> {
    let cfg = load_config(config).context("load demo config")?;
    let report = demo::build_report(&cfg)?;
    debug!(sections = report.sections.len(), json, "printing demo");
    if json {
        let payload = serde_json::to_string_pretty(&report).context("serialize report json")?;
        println!("{payload}");
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &TextkitConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn print_all(items: &[&str]) {
    for item in items {
        println!("{item}");
    }
}
