// Domain layer: request/response shapes of the polling API and the ports the client implements.

pub mod model;
pub mod ports;
