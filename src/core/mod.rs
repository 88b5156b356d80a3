pub mod engine;
pub mod multiples;
pub mod reversed_digits;

pub use crate::domain::model::{MultiplesReport, ReversedSumExample};
pub use crate::domain::ports::Demo;
pub use crate::utils::error::Result;
