mod exports;
mod shell;

pub use exports::*;
pub use shell::*;
