#[cfg(feature = "cli")]
pub mod cli;
pub mod demo;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use demo::DemoConfig;
