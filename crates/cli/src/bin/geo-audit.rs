// ABOUTME: CLI binary running a GEO audit of one URL.
// ABOUTME: Outputs the text report or JSON to stdout or a file; exits 1 when the page cannot be fetched.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use geolens_cli::audit::crawler_client;
use geolens_cli::report::render_audit_report;
use geolens_cli::telemetry::{init_tracing, DEFAULT_LEVEL};
use geolens_cli::{AuditMode, GeoAuditor, LogArgs, NetworkArgs};

#[derive(Parser, Debug)]
#[command(name = "geo-audit")]
#[command(about = "GEO Audit - Generative Engine Optimization analysis")]
struct Args {
    /// URL to audit
    url: String,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Audit mode
    #[arg(short = 'm', long, value_enum, default_value_t = AuditMode::Full)]
    mode: AuditMode,

    /// Year the site launched (for strategy recommendations)
    #[arg(long)]
    launch_year: Option<i32>,

    /// Output as JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    network: NetworkArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log.log_json, DEFAULT_LEVEL);

    let client = match crawler_client(&args.network) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error building HTTP client: {}", e);
            return ExitCode::from(1);
        }
    };

    let auditor = match GeoAuditor::fetch(client, &args.url, args.launch_year) {
        Ok(auditor) => auditor,
        Err(e) => {
            eprintln!("Error fetching URL: {}", e);
            return ExitCode::from(1);
        }
    };

    let report = auditor.run(args.mode, Utc::now());

    let output = if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("error serializing report: {}", e);
                return ExitCode::from(1);
            }
        }
    } else {
        render_audit_report(&report)
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("error writing {}: {}", path.display(), e);
                return ExitCode::from(1);
            }
            println!("Report saved to: {}", path.display());
        }
        None => println!("{}", output),
    }

    ExitCode::SUCCESS
}
