use clap::Parser;
use pitstop::config::toml_config;
use pitstop::core::directions;
use pitstop::utils::{logger, validation::Validate};
use pitstop::{
    CliConfig, Coordinates, FixedPositionProvider, HttpPositionProvider, ServiceCenter,
    ServiceDirectory, SystemNavigator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting pitstop");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let directory = match &config.directory {
        Some(path) => match toml_config::load_directory(path) {
            Ok(directory) => directory,
            Err(e) => {
                tracing::error!("❌ Directory load failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => ServiceDirectory::builtin(),
    };
    tracing::info!("📇 {} service centers loaded", directory.centers().len());

    let center = locate(&config, directory).await;

    tracing::info!("✅ Nearest center for {}: {}", config.component, center.name);
    println!("🔧 {}", center.name);
    println!("📍 {}", center.address);
    println!("📞 {}", center.phone);

    let request = directions::build_directions_request(&center)?;
    if config.no_open {
        println!("🗺  {}", request.web);
        return Ok(());
    }

    let outcome = directions::dispatch(&SystemNavigator, &request).await;
    if outcome.success {
        tracing::info!("Directions dispatched to {}", outcome.url);
        println!("🗺  Directions opened: {}", outcome.url);
    } else {
        tracing::warn!("Navigation blocked, presenting URL for manual use");
        println!("🗺  Could not open a browser; use this URL: {}", outcome.url);
    }

    Ok(())
}

async fn locate(config: &CliConfig, directory: ServiceDirectory) -> ServiceCenter {
    use pitstop::ServiceLocator;

    match (config.lat, config.lng) {
        (Some(lat), Some(lng)) => {
            let positioner = FixedPositionProvider::new(Coordinates { lat, lng });
            ServiceLocator::new(directory, positioner)
                .with_request(config.position_request())
                .find_nearest(&config.component)
                .await
        }
        _ => {
            let positioner = HttpPositionProvider::new(config.position_endpoint.clone());
            ServiceLocator::new(directory, positioner)
                .with_request(config.position_request())
                .find_nearest(&config.component)
                .await
        }
    }
}
