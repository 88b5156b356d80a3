use clap::Parser;
use small_puzzles::utils::{logger, validation::Validate};
use small_puzzles::{CliConfig, DemoConfig, DemoEngine, MultiplesDemo};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    let config = DemoConfig::default();
    config.validate()?;

    let engine = DemoEngine::new(MultiplesDemo::from_config(&config));
    if let Err(e) = engine.run(&mut std::io::stdout().lock()) {
        tracing::error!("❌ Multiples demo failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
