//! Reference command line front-end.
//!
//! Reads a password from standard input and prints its strength report.
//!
//! Usage:
//!   echo 'Abcdef12!@' | pwd-entropy --bar

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use pwd_entropy::{evaluate, EvaluationError, StrengthReport, BAR_MAX_WIDTH};
use secrecy::{ExposeSecret, SecretString};
use tracing_subscriber::EnvFilter;

/// Number of cells in the text strength bar.
const BAR_CELLS: u32 = 30;

#[derive(Parser, Debug)]
#[command(name = "pwd-entropy", version)]
#[command(about = "Estimate password strength from stdin")]
struct Args {
    /// Evaluate every input line until end of input
    #[arg(long)]
    each_line: bool,

    /// Output format
    #[arg(long, value_enum, env = "PWD_ENTROPY_FORMAT", default_value_t = Format::Text)]
    format: Format,

    /// How to echo the password back (text format only)
    #[arg(long, value_enum, env = "PWD_ENTROPY_ECHO", default_value_t = Echo::Hidden)]
    echo: Echo,

    /// Print a strength bar under the report (text format only)
    #[arg(long)]
    bar: bool,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Echo {
    Hidden,
    Masked,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let use_color = match args.color {
        ColorChoice::Auto => io::stdout().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    colored::control::set_override(use_color);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    if !args.each_line {
        let password = match lines.next() {
            Some(line) => line.context("Failed to read password from stdin")?,
            None => String::new(),
        };
        let password = SecretString::new(password.into());
        let report = evaluate(&password)?;
        return write_report(&mut out, &args, &password, &report);
    }

    let mut first = true;
    for line in lines {
        let password = SecretString::new(line.context("Failed to read stdin")?.into());
        match evaluate(&password) {
            Ok(report) => {
                if !first && args.format == Format::Text {
                    writeln!(out)?;
                }
                first = false;
                write_report(&mut out, &args, &password, &report)?;
            }
            Err(e @ EvaluationError::EmptyInput) => {
                tracing::debug!("skipping empty line");
                eprintln!("Error: {e}");
            }
        }
    }
    Ok(())
}

fn write_report(
    out: &mut impl Write,
    args: &Args,
    password: &SecretString,
    report: &StrengthReport,
) -> Result<()> {
    if args.format == Format::Json {
        let json = serde_json::to_string(report).context("Failed to serialize report")?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    match args.echo {
        Echo::Hidden => {}
        Echo::Masked => {
            let mask = "*".repeat(password.expose_secret().chars().count());
            writeln!(out, "Password: {mask}")?;
        }
        Echo::Plain => writeln!(out, "Password: {}", password.expose_secret())?,
    }

    let (r, g, b) = report.tier().color_rgb();
    let text = report.to_string();
    let (tier_line, rest) = text.split_once('\n').unwrap_or((text.as_str(), ""));
    writeln!(out, "{}", tier_line.truecolor(r, g, b).bold())?;
    writeln!(out, "{rest}")?;

    if args.bar {
        writeln!(out, "{}", render_bar(report))?;
    }
    Ok(())
}

fn render_bar(report: &StrengthReport) -> String {
    let tier = report.tier();
    let filled = (tier.bar_width() * BAR_CELLS / BAR_MAX_WIDTH) as usize;
    let empty = BAR_CELLS as usize - filled;
    let (r, g, b) = tier.color_rgb();
    format!(
        "[{}{}]",
        "#".repeat(filled).truecolor(r, g, b),
        "-".repeat(empty)
    )
}
