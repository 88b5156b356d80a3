use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-puzzles")]
#[command(about = "Sum multiples of 3 or 5 and add reversed digit sequences")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
