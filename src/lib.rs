pub mod activate;
pub mod bootstrap;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod layout;
pub mod util;
