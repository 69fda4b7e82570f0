use clap::Parser;
use small_addressbook::utils::{logger, validation::Validate};
use small_addressbook::{CliConfig, FindEngine, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting find-contacts");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(".".to_string());
    let engine = FindEngine::new(storage, config);

    match engine.run() {
        Ok(outcome) => {
            tracing::info!("{} of {} persons matched", outcome.matched, outcome.total);
            match outcome.written_to {
                Some(path) => println!("{} persons listed! Saved to: {}", outcome.matched, path),
                None => println!("{}", outcome.rendered),
            }
        }
        Err(e) => {
            tracing::error!("find-contacts failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
