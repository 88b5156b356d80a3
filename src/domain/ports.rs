use crate::utils::error::Result;
use std::io::Write;

/// A console demonstration: computes its results and renders them as text.
pub trait Demo {
    fn name(&self) -> &str;
    fn render(&self, out: &mut dyn Write) -> Result<()>;
}
