// Standard library
use std::error::Error;
use std::process::ExitCode;

// 3rd party crates
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use pubip::cli::{render_catalog, Args};
use pubip::fetcher::Fetcher;
use pubip::settings::Settings;
use pubip::sources::Catalog;

/// Dependencies whose logs are only interesting when they fail.
const QUIET_CRATES: [&str; 5] = ["hyper_util", "hyper", "reqwest", "rustls", "hickory_proto"];

/// Looks up the public IP address and prints it on stdout.
///
/// Logs go to stderr so the output can be captured by scripts. The process
/// exits with a failure status when no source answered.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let args = Args::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings);

    match run(args, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(settings: &Settings) {
    let mut filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(settings.get_log_level());

    for krate in QUIET_CRATES {
        if let Ok(directive) = format!("{}=error", krate).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::builtin();

    if args.list {
        print!("{}", render_catalog(&catalog));
        return Ok(());
    }

    let filter = args.filter();
    debug!("Source filter: {:?}", filter);

    let fetcher = Fetcher::from_settings(settings)?;
    match fetcher.lookup(&catalog, filter.as_ref()).await {
        Some(ip) => {
            println!("{}", ip);
            Ok(())
        }
        None => Err("Failed to get public ip-address.".into()),
    }
}
