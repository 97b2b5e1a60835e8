// ABOUTME: CLI binary that generates or validates NANDA AgentFacts documents.
// ABOUTME: Exits 0 for valid documents and 1 for invalid ones or on I/O failure.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use geolens_cli::facts::{parse_list, validate_target};
use geolens_cli::report::render_validation;
use geolens_cli::telemetry::{init_tracing, DEFAULT_LEVEL};
use geolens_cli::{LogArgs, NetworkArgs};
use geolens_core::{generate, GenerateOptions, HumanOversight, ValidationResult};

#[derive(Parser, Debug)]
#[command(name = "agent-facts")]
#[command(about = "Generate or validate AgentFacts schema")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Validate the document at URL and print the result as JSON
    #[arg(long = "validate", value_name = "URL")]
    validate: Option<String>,

    #[command(flatten)]
    network: NetworkArgs,

    #[command(flatten)]
    log: LogArgs,
}

/// `agent-facts --domain example.com` without a subcommand still generates.
#[derive(Parser, Debug)]
#[command(name = "agent-facts")]
struct BareGenerate {
    #[command(flatten)]
    generate: GenerateArgs,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Domain name
    #[arg(short = 'd', long)]
    domain: String,

    /// Agent display name
    #[arg(short = 'n', long)]
    agent_name: Option<String>,

    /// Service description
    #[arg(long)]
    description: Option<String>,

    /// Capabilities (comma-separated: text,image,audio,video,code)
    #[arg(short = 'c', long)]
    capabilities: Option<String>,

    /// Auth methods (comma-separated: oauth2,jwt,apikey,none)
    #[arg(short = 'a', long)]
    auth: Option<String>,

    /// API endpoints (comma-separated URLs)
    #[arg(short = 'e', long)]
    endpoints: Option<String>,

    /// Human oversight level: true, false or on-request
    #[arg(long, default_value = "true")]
    human_oversight: HumanOversight,

    /// Output file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output minified JSON
    #[arg(long)]
    minify: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate AgentFacts schema
    Generate(GenerateArgs),
    /// Validate AgentFacts schema
    Validate {
        /// URL or local JSON file to validate
        target: String,

        /// Print the validation result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn exit_for(result: &ValidationResult) -> ExitCode {
    if result.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn print_json(result: &ValidationResult) -> ExitCode {
    match serde_json::to_string_pretty(result) {
        Ok(json) => {
            println!("{}", json);
            exit_for(result)
        }
        Err(e) => {
            eprintln!("error serializing result: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run_validate(target: &str, network: &NetworkArgs, json: bool) -> ExitCode {
    let result = match validate_target(target, network) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    if json {
        print_json(&result)
    } else {
        print!("{}", render_validation(&result));
        exit_for(&result)
    }
}

fn run_generate(args: GenerateArgs) -> ExitCode {
    let opts = GenerateOptions {
        domain: args.domain,
        agent_name: args.agent_name,
        description: args.description,
        capabilities: parse_list(args.capabilities.as_deref()),
        auth_methods: parse_list(args.auth.as_deref()),
        endpoints: parse_list(args.endpoints.as_deref()),
        human_oversight: args.human_oversight,
    };
    let schema = generate(&opts);
    tracing::info!(id = %schema.id, agent = %schema.display_name, "generated AgentFacts");

    let json = match schema.to_json(args.minify) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error serializing schema: {}", e);
            return ExitCode::from(1);
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("error writing {}: {}", path.display(), e);
                return ExitCode::from(1);
            }
            println!("Schema saved to: {}", path.display());
        }
        None => println!("{}", json),
    }
    ExitCode::SUCCESS
}

/// Generate from top-level flags, or report the usage error clap gives.
fn run_bare_generate(fallback: Option<clap::Error>) -> ExitCode {
    match BareGenerate::try_parse() {
        Ok(bare) => {
            init_tracing(bare.log.log_json, DEFAULT_LEVEL);
            run_generate(bare.generate)
        }
        Err(e) => match fallback {
            Some(original) => original.exit(),
            None => e.exit(),
        },
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return run_bare_generate(Some(e)),
    };

    let command = match args.command {
        Some(command) => command,
        None => match &args.validate {
            Some(url) => {
                init_tracing(args.log.log_json, DEFAULT_LEVEL);
                return run_validate(url, &args.network, true);
            }
            None => return run_bare_generate(None),
        },
    };

    init_tracing(args.log.log_json, DEFAULT_LEVEL);
    match command {
        Command::Generate(generate_args) => run_generate(generate_args),
        Command::Validate { target, json } => run_validate(&target, &args.network, json),
    }
}
