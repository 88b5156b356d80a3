use crate::utils::error::Result;
use crate::utils::validation::{
    validate_digits, validate_non_empty, validate_positive_number, Validate,
};

pub const DEFAULT_LIMIT: u64 = 1000;
pub const DEFAULT_PREVIEW_LEN: usize = 10;

/// Fixed inputs for the console demonstrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub limit: u64,
    /// How many multiples to list before switching to a count.
    pub preview_len: usize,
    pub examples: Vec<(Vec<u32>, Vec<u32>)>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            preview_len: DEFAULT_PREVIEW_LEN,
            examples: vec![(vec![1, 2, 3], vec![4, 5, 6]), (vec![9, 9], vec![1])],
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("preview_len", self.preview_len, 1)?;

        for (index, (first, second)) in self.examples.iter().enumerate() {
            let number = index + 1;
            validate_non_empty(&format!("examples[{}].first", number), first)?;
            validate_non_empty(&format!("examples[{}].second", number), second)?;
            validate_digits(&format!("examples[{}].first", number), first)?;
            validate_digits(&format!("examples[{}].second", number), second)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DemoConfig::default();
        assert_eq!(config.limit, 1000);
        assert_eq!(config.examples.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_preview() {
        let config = DemoConfig {
            preview_len: 0,
            ..DemoConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_example_digits() {
        let config = DemoConfig {
            examples: vec![(vec![1, 10], vec![2])],
            ..DemoConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("examples[1].first[1]"));

        let config = DemoConfig {
            examples: vec![(vec![1], vec![])],
            ..DemoConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
