// Domain layer: rule and report models plus the `Check` port. No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
