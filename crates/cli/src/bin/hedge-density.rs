// ABOUTME: CLI binary that measures hedge-word density in a URL, file or inline text.
// ABOUTME: Prints a text or JSON report and exits non-zero when density exceeds the threshold.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use geolens_cli::report::render_density_report;
use geolens_cli::telemetry::{init_tracing, DEFAULT_LEVEL};
use geolens_cli::{load_text, LogArgs, NetworkArgs, TextSource};
use geolens_core::analyze;
use geolens_core::thresholds::DEFAULT_DENSITY_THRESHOLD;

#[derive(Parser, Debug)]
#[command(name = "hedge-density")]
#[command(about = "Analyze hedge density in content for AI visibility")]
#[command(group(ArgGroup::new("source").required(true).args(["url", "text", "file"])))]
struct Args {
    /// URL to analyze
    #[arg(short = 'u', long)]
    url: Option<String>,

    /// Text to analyze directly
    #[arg(short = 't', long)]
    text: Option<String>,

    /// File to analyze
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Show all findings (not just first 10)
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Don't show context around hedge words
    #[arg(long)]
    no_context: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Exit with code 1 if density exceeds threshold
    #[arg(long, default_value_t = DEFAULT_DENSITY_THRESHOLD)]
    threshold: f64,

    #[command(flatten)]
    network: NetworkArgs,

    #[command(flatten)]
    log: LogArgs,
}

impl Args {
    fn source(&self) -> Option<TextSource> {
        if let Some(url) = &self.url {
            Some(TextSource::Url(url.clone()))
        } else if let Some(path) = &self.file {
            Some(TextSource::File(path.clone()))
        } else {
            self.text.clone().map(TextSource::Text)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log.log_json, DEFAULT_LEVEL);

    let Some(source) = args.source() else {
        eprintln!("error: one of --url, --text or --file is required");
        return ExitCode::from(1);
    };

    if let TextSource::Url(url) = &source {
        if !args.json {
            println!("Fetching: {}", url);
        }
    }

    let text = match load_text(&source, &args.network) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(1);
        }
    };

    let report = analyze(&text, args.verbose);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error serializing report: {}", e);
                return ExitCode::from(1);
            }
        }
    } else {
        print!("{}", render_density_report(&report, !args.no_context));
    }

    if report.exceeds(args.threshold) {
        tracing::info!(threshold = args.threshold, "hedge density above threshold");
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
