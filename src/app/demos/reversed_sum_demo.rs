use crate::config::DemoConfig;
use crate::core::{Demo, Result, ReversedSumExample};
use std::io::Write;

pub struct ReversedSumDemo {
    examples: Vec<(Vec<u32>, Vec<u32>)>,
}

impl ReversedSumDemo {
    pub fn new(examples: Vec<(Vec<u32>, Vec<u32>)>) -> Self {
        Self { examples }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(config.examples.clone())
    }
}

impl Demo for ReversedSumDemo {
    fn name(&self) -> &str {
        "reversed digit sum"
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        for (index, (first, second)) in self.examples.iter().enumerate() {
            let example = ReversedSumExample::evaluate(first, second)?;

            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "Example {}:", index + 1)?;
            writeln!(
                out,
                "Array 1: {:?} (represents {})",
                example.first, example.first_value
            )?;
            writeln!(
                out,
                "Array 2: {:?} (represents {})",
                example.second, example.second_value
            )?;
            writeln!(out, "Sum: {}", example.sum)?;
            writeln!(out, "Result array: {:?}", example.result)?;
        }
        Ok(())
    }
}
