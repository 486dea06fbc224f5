mod debug_report;

use anyhow::{Context, Result};
use clap::Parser;
use seqtract::{Family, Options, extract_verbose_with};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

/// Extract phone numbers, emails, hashtags, GUIDs, IP addresses, mentions
/// and URLs from text.
///
/// Set SEQTRACT_LOG (e.g. `SEQTRACT_LOG=seqtract=debug`) to trace the
/// collection and merge phases on stderr.
#[derive(Debug, Parser)]
#[command(name = "seqtract", version, about, after_help = EXIT_CODES)]
struct Cli {
    /// Input text. If omitted, the trailing words are used, or stdin when
    /// there are none.
    #[arg(short, long, conflicts_with = "words")]
    input: Option<String>,

    /// Families to run, comma separated (phonenumber, email, hashtag, guid,
    /// ip, mention, url). Default: all.
    #[arg(short, long, value_delimiter = ',')]
    families: Vec<Family>,

    /// Print the entities as JSON instead of the trace report.
    #[arg(long)]
    json: bool,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

const EXIT_CODES: &str = "Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.";

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let input = match read_input(&cli) {
        Ok(input) if !input.trim().is_empty() => input,
        Ok(_) => {
            eprintln!("error: no input provided\n\nRun `seqtract --help` for usage.");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&cli, &input) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, input: &str) -> Result<()> {
    let options =
        if cli.families.is_empty() { Options::default() } else { Options::only(cli.families.iter().copied()) };
    let res = extract_verbose_with(input, &options);

    if cli.json {
        let json = serde_json::to_string_pretty(&res.results).context("failed to serialize entities")?;
        println!("{json}");
        return Ok(());
    }

    let color = if cli.no_color {
        false
    } else {
        cli.color || io::stdout().is_terminal()
    };
    debug_report::print_run(input, &res.results, &res.details, color);
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(input) = &cli.input {
        return Ok(input.clone());
    }
    if !cli.words.is_empty() {
        return Ok(cli.words.join(" "));
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
    Ok(buffer)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SEQTRACT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}
