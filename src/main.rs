use clap::Parser;
use flat_tree::domain::ports::ConfigProvider;
use flat_tree::utils::logger;
use flat_tree::{CliConfig, FlattenEngine, LocalStorage};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting flat-tree");
    tracing::debug!("CLI arguments: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = FlattenEngine::new(storage, config);

    let result = if cli.dry_run {
        tracing::info!("Dry run, nothing will be written");
        engine.dry_run()
    } else {
        engine.run()
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                "Tree '{}': {} entries, {} branches",
                summary.tree,
                summary.events,
                summary.branches
            );
            if cli.verbose {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            for file in &summary.files {
                println!("📁 {}", file);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Flattening failed: {} (severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
