// Domain layer: value types and ports shared by the core, config and binaries.

pub mod model;
pub mod ports;
