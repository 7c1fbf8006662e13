use pod_resolver::cli::commands::{self, Settings};
use pod_resolver::cli::{self, Action, Cli};
use pod_resolver::config::{ResolverConfig, DEFAULT_LOG_FILE};
use pod_resolver::k8s::K8sClient;
use pod_resolver::report::{Outcome, Stopwatch};
use pod_resolver::{logging, Result};
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let code = tokio::select! {
        code = run() => code,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            println!("Goodbye!");
            1
        }
    };

    let _ = io::stdout().flush();
    process::exit(code);
}

async fn run() -> i32 {
    let cli = match cli::parse_from(std::env::args_os(), &mut io::stdout()) {
        Ok(cli) => cli,
        Err(code) => {
            if code != 0 && start_logging(Path::new(DEFAULT_LOG_FILE), false) {
                error!("Invalid command line arguments");
            }
            return code;
        }
    };

    let config = match ResolverConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            if start_logging(Path::new(DEFAULT_LOG_FILE), cli.verbose) {
                error!(error = %e, "Failed to load configuration");
            }
            return 1;
        }
    };

    if !start_logging(&config.log_file, cli.verbose) {
        return 1;
    }
    debug!(?cli, ?config, "Parsed options");

    let stopwatch = Stopwatch::start();

    match resolve(&cli, &config, &stopwatch).await {
        Ok(outcome) => {
            debug!(?outcome, "Finished");
            outcome.exit_code()
        }
        Err(e) => {
            println!("{}", e);
            error!(error = %e, "Resolver failed");
            1
        }
    }
}

fn start_logging(path: &Path, verbose: bool) -> bool {
    if let Err(e) = logging::initialize(path, verbose) {
        eprintln!("Error: {:#}", e);
        return false;
    }

    true
}

async fn resolve(cli: &Cli, config: &ResolverConfig, stopwatch: &Stopwatch) -> Result<Outcome> {
    let action = Action::from_cli(cli)?;
    info!("Running {:?}", action);

    let settings = Settings::new(config, cli.filter_namespace);
    let client = K8sClient::try_default().await?;

    let mut stdout = io::stdout();
    commands::handle_action(&action, &client, &settings, stopwatch, &mut stdout).await
}
