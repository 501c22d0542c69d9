mod args;
mod error;
mod logger;

pub use args::{CliArgs, Command};
pub use error::HeadlessError;
pub use logger::setup_logging;
