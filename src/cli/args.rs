use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(about = "Team meeting task review with AI-generated summaries", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the review API service (default when no command is given)
    Serve,
    /// List the meetings available for review
    Meetings,
    /// Review a meeting interactively in the terminal
    Review(ReviewCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct ReviewCliArgs {
    /// Id of the meeting to review; prompts for one if omitted
    pub meeting_id: Option<String>,
}
