//! planet-wars CLI - plays one engine session over stdin/stdout.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use planet_wars::{build_policy, ClientConfig, ClientError, GameClient, ParseErrorMode, PolicyKind};

/// Planet Wars turn client
#[derive(Parser, Debug)]
#[command(name = "planet-wars")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Decision policy (overrides the config file)
    #[arg(short, long, value_enum)]
    policy: Option<PolicyKind>,

    /// Seed for randomized policies (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Answer malformed turns with a bare `go` instead of exiting
    #[arg(long)]
    skip_malformed: bool,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "planet_wars=info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), ClientError> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::from_json_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(policy) = args.policy {
        config = config.with_policy(policy);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.skip_malformed {
        config = config.with_parse_error_mode(ParseErrorMode::SkipTurn);
    }
    info!(?config, "starting client");

    let mut client =
        GameClient::new(build_policy(&config)).with_parse_error_mode(config.on_parse_error);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    client.run(stdin.lock(), &mut stdout, &mut stderr)?;
    Ok(())
}

/// Log a fatal error with its whole cause chain.
fn report(err: &ClientError) {
    error!(causes = ?err.chain(), "fatal error");
    eprintln!("Error: {}", err.report());
}
