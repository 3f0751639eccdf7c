use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lucas-dashboard")]
#[command(about = "Renders the Lucas metrics dashboard.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Serve the dashboard page over HTTP
    #[command(alias = "s")]
    Serve,
    /// Wait for the panel to settle and print the page to stdout
    #[command(alias = "r")]
    Render,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}
