//! Interactive command-line front end for the ferz rules engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::CliError;
pub use session::{Session, SessionConfig};
