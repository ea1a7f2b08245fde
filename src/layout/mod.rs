mod layout;
mod path;

pub use layout::*;
pub use path::*;

#[cfg(test)]
mod layout_test;
