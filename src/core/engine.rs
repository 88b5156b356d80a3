use crate::core::Demo;
use crate::utils::error::Result;
use std::io::Write;

pub struct DemoEngine<D: Demo> {
    demo: D,
}

impl<D: Demo> DemoEngine<D> {
    pub fn new(demo: D) -> Self {
        Self { demo }
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        tracing::info!("Running {} demo", self.demo.name());

        self.demo.render(out)?;
        out.flush()?;

        tracing::info!("Finished {} demo", self.demo.name());
        Ok(())
    }
}
