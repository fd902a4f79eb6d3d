// Domain layer: the vacation model, state registry, civil time and the transport ports.
// Nothing in here performs I/O.

pub mod model;
pub mod ports;
pub mod state;
pub mod time;
