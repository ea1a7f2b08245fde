mod activator;
mod conda;

pub use activator::*;
pub use conda::*;
