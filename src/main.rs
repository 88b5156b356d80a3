use anyhow::Context;
use clap::Parser;
use small_puzzles::utils::{logger, validation::Validate};
use small_puzzles::{CliConfig, DemoConfig, DemoEngine, MultiplesDemo, PuzzleError, ReversedSumDemo};
use std::io::Write;

fn run(config: &DemoConfig, out: &mut dyn Write) -> small_puzzles::Result<()> {
    DemoEngine::new(MultiplesDemo::from_config(config)).run(out)?;
    writeln!(out)?;
    DemoEngine::new(ReversedSumDemo::from_config(config)).run(out)
}

fn fail(e: &PuzzleError) -> ! {
    tracing::error!("❌ Demo failed: {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting small-puzzles");

    let config = DemoConfig::default();
    tracing::debug!("Demo config: {:?}", config);
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&config, &mut out) {
        fail(&e);
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}
