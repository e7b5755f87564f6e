use clap::Parser;
use es_fair_value::cli::{Cli, Commands};
use es_fair_value::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _telemetry = es_fair_value::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Serve(args) => {
            tracing::info!("Starting fair value service");
            args.execute(&config).await?;
        }
        Commands::Fetch(args) => {
            args.fetch(&config).await?;
        }
        Commands::Calculate(args) => {
            args.calculate(&config).await?;
        }
        Commands::Manual(args) => {
            args.execute()?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Source: {}", config.source.url);
            println!("  User-Agent: {}", config.source.user_agent);
            println!("  Timeout: {}s", config.source.timeout_secs);
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
            match config.telemetry.metrics_port {
                Some(port) => println!("  Metrics: port {}", port),
                None => println!("  Metrics: disabled"),
            }
        }
    }

    Ok(())
}
