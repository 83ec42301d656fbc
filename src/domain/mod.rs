pub mod errors;
pub mod lookup;
pub mod market;
pub mod ports;
