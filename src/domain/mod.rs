// Domain layer: core models and the clock port. No I/O.

pub mod model;
pub mod ports;
