use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sk-server")]
#[command(about = "Starter kit REST API server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// What to run; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run migrations and start the HTTP server
    Serve,
    /// Apply pending database migrations
    Migrate {
        /// Also insert the default admin user when the table is empty
        #[arg(long)]
        seed: bool,
    },
    /// Insert the default admin user when the table is empty
    Seed,
    /// Revert all database migrations (drops the users table)
    Rollback,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
