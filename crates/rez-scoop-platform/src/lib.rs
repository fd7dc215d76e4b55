pub mod arch;
pub mod command;
pub mod fs;
pub mod os;
pub mod shell;

mod error;

pub use command::Command;
pub use error::{Error, Result};
pub use shell::Shell;
