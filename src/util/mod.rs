mod io;
mod log;

pub use io::*;
pub use log::*;

#[cfg(test)]
pub mod testing;
