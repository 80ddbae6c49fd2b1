use card_pricer::utils::{logger, validation::Validate};
use card_pricer::{from_config, CliConfig};
use clap::Parser;
use std::io::Read;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting card-pricer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let message = match &config.message {
        Some(message) => message.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if message.trim().is_empty() {
        eprintln!("No card references supplied");
        std::process::exit(1);
    }

    let pipeline = from_config(&config);
    let result = pipeline.run(&message).await;

    tracing::info!("Resolved {} card reference(s)", result.len());
    println!("{}", result.render());

    Ok(())
}
