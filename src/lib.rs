pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::demos::{MultiplesDemo, ReversedSumDemo};
pub use crate::config::DemoConfig;
pub use crate::core::engine::DemoEngine;
pub use crate::core::multiples::{find_multiples_and_sum, is_multiple_of_3_or_5};
pub use crate::core::reversed_digits::{
    add_reversed_digit_sequences, digit_sequence_to_integer, integer_to_digit_sequence,
};
pub use crate::domain::model::{MultiplesReport, ReversedSumExample};
pub use crate::utils::error::{PuzzleError, Result};
