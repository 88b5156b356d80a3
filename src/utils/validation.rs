use crate::utils::error::{PuzzleError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PuzzleError::invalid_argument(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PuzzleError::invalid_argument(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Every element must be a single decimal digit.
pub fn validate_digits(field_name: &str, digits: &[u32]) -> Result<()> {
    for (index, &digit) in digits.iter().enumerate() {
        validate_range(&format!("{}[{}]", field_name, index), digit, 0, 9)?;
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(PuzzleError::invalid_argument(
            field_name,
            "[]",
            "Sequence cannot be empty",
        ));
    }
    Ok(())
}
