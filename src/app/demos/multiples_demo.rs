use crate::config::DemoConfig;
use crate::core::multiples::find_multiples_and_sum;
use crate::core::{Demo, MultiplesReport, Result};
use std::io::Write;

pub struct MultiplesDemo {
    limit: u64,
    preview_len: usize,
}

impl MultiplesDemo {
    pub fn new(limit: u64, preview_len: usize) -> Self {
        Self { limit, preview_len }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(config.limit, config.preview_len)
    }

    fn write_report(&self, report: &MultiplesReport, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Natural numbers below {} that are multiples of 3 or 5:",
            report.limit()
        )?;

        // Long lists are cut to a preview plus a count
        if report.count() > self.preview_len {
            writeln!(
                out,
                "First {} multiples: {:?}...",
                self.preview_len,
                report.preview(self.preview_len)
            )?;
            writeln!(out, "Total number of multiples found: {}", report.count())?;
        } else {
            writeln!(out, "Multiples: {:?}", report.multiples())?;
        }

        writeln!(out, "Sum of these multiples: {}", report.total())?;
        Ok(())
    }
}

impl Demo for MultiplesDemo {
    fn name(&self) -> &str {
        "multiples"
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        let report = find_multiples_and_sum(self.limit);
        self.write_report(&report, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(limit: u64, preview_len: usize) -> String {
        let mut buffer = Vec::new();
        MultiplesDemo::new(limit, preview_len)
            .render(&mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_short_list_printed_in_full() {
        assert_eq!(
            render(16, 10),
            "Natural numbers below 16 that are multiples of 3 or 5:\n\
             Multiples: [3, 5, 6, 9, 10, 12, 15]\n\
             Sum of these multiples: 60\n"
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            render(1, 10),
            "Natural numbers below 1 that are multiples of 3 or 5:\n\
             Multiples: []\n\
             Sum of these multiples: 0\n"
        );
    }

    #[test]
    fn test_exactly_preview_len_is_not_truncated() {
        // 3, 5, 6, 9, 10, 12, 15, 18, 20, 21
        let output = render(22, 10);
        assert!(output.contains("Multiples: [3, 5, 6, 9, 10, 12, 15, 18, 20, 21]\n"));
        assert!(!output.contains("Total number"));
    }
}
