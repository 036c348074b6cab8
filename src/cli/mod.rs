pub mod args;

mod meetings;
mod review;

pub use args::{Cli, CliCommand, ReviewCliArgs};
pub use meetings::handle_meetings_command;
pub use review::handle_review_command;
