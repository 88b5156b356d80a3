pub mod multiples_demo;
pub mod reversed_sum_demo;

pub use multiples_demo::MultiplesDemo;
pub use reversed_sum_demo::ReversedSumDemo;
