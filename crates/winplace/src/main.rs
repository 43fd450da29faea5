mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "winplace",
    version,
    about = "Snapshot and restore desktop window layouts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration files
    Init,
    /// Listen for the snapshot/restore hotkeys until quit
    Run,
    /// Record the current window layout to the database and exit
    Snapshot,
    /// Restore the layout stored in the database and exit
    Restore,
    /// List the windows a snapshot would record
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        #[cfg(windows)]
        Commands::Run => commands::run::execute(),
        #[cfg(windows)]
        Commands::Snapshot => commands::snapshot::execute(),
        #[cfg(windows)]
        Commands::Restore => commands::restore::execute(),
        #[cfg(windows)]
        Commands::List => commands::list::execute(),
        #[cfg(not(windows))]
        Commands::Run | Commands::Snapshot | Commands::Restore | Commands::List => {
            commands::unsupported()
        }
    }
}
