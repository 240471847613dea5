// Domain layer: models and ports. No I/O here beyond the `Write` sink handed to `Pipeline::load`.

pub mod model;
pub mod ports;
