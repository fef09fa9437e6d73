// Domain layer: column types, event model and ports. No IO here.

pub mod column;
pub mod model;
pub mod ports;
