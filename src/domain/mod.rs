// Domain layer: result models and the demo port. No external dependencies beyond std.

pub mod model;
pub mod ports;
